//! Legal Chat - Controller
//!
//! Async flows behind the view's handlers. Each flow opens a request on the
//! state, makes exactly one call to the service and applies the outcome.

use super::model::ChatApi;
use super::state::ChatState;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Somewhere a [`ChatState`] lives: a signal in the view, a cell in tests.
pub trait ChatStore {
    /// Run `f` against the state. `None` if the state is gone (the view was
    /// disposed while a request was in flight).
    fn with_state<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
}

impl ChatStore for RwSignal<ChatState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ChatStore for Rc<RefCell<ChatState>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Upload `file` and replace the preview with its extracted text
pub async fn upload_file<A, S>(api: &A, store: &S, file: &A::File, file_name: String)
where
    A: ChatApi,
    S: ChatStore,
{
    let Some(token) = store.with_state(|s| s.begin_upload(file_name.clone())) else {
        return;
    };
    log::debug!("Uploading '{}'", file_name);

    let outcome = api.upload_file(file).await;
    store.with_state(|s| s.complete_upload(token, outcome));
}

/// Send the typed question together with the current extracted text.
///
/// Makes no request when the state declines the send.
pub async fn send_message<A, S>(api: &A, store: &S)
where
    A: ChatApi,
    S: ChatStore,
{
    let Some(pending) = store.with_state(|s| s.begin_query()).flatten() else {
        return;
    };
    log::debug!(
        "Sending query ({} chars question, {} chars file content)",
        pending.request.question.len(),
        pending.request.file_content.len()
    );

    let outcome = api.query(&pending.request).await;
    store.with_state(|s| s.complete_query(pending.token, outcome));
}

#[cfg(test)]
mod tests {
    use super::super::model::ApiError;
    use super::*;
    use contracts::domain::a001_legal_chat::{
        ChatRole, FilePreview, QueryRequest, QueryResponse, UploadResponse, QUERY_FAILURE_REPLY,
    };
    use std::cell::Cell;

    /// Canned service that records what it was asked
    #[derive(Default)]
    struct FakeApi {
        upload_reply: Option<Result<UploadResponse, ApiError>>,
        query_reply: Option<Result<QueryResponse, ApiError>>,
        uploads: Cell<usize>,
        queries: RefCell<Vec<QueryRequest>>,
    }

    impl ChatApi for FakeApi {
        type File = &'static str;

        async fn upload_file(&self, _file: &&'static str) -> Result<UploadResponse, ApiError> {
            self.uploads.set(self.uploads.get() + 1);
            self.upload_reply
                .clone()
                .unwrap_or_else(|| Err(ApiError::Network("no reply".into())))
        }

        async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
            self.queries.borrow_mut().push(request.clone());
            self.query_reply
                .clone()
                .unwrap_or_else(|| Err(ApiError::Network("no reply".into())))
        }
    }

    fn store() -> Rc<RefCell<ChatState>> {
        Rc::new(RefCell::new(ChatState::new()))
    }

    #[tokio::test]
    async fn test_send_without_content_makes_no_call() {
        let api = FakeApi::default();
        let store = store();

        send_message(&api, &store).await;

        assert!(api.queries.borrow().is_empty());
        assert!(store.borrow().messages.is_empty());
    }

    #[tokio::test]
    async fn test_send_with_only_file_text() {
        let api = FakeApi {
            query_reply: Some(Ok(QueryResponse {
                answer: Some("Summary".into()),
            })),
            ..Default::default()
        };
        let store = store();
        store.borrow_mut().preview = Some(FilePreview::new("lease.pdf", "Lease terms"));

        send_message(&api, &store).await;

        let queries = api.queries.borrow();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].question, "");
        assert_eq!(queries[0].file_content, "Lease terms");

        let state = store.borrow();
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].text(), "");
        assert_eq!(state.messages[1].text(), "Summary");
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_query_network_failure() {
        let api = FakeApi {
            query_reply: Some(Err(ApiError::Network("Failed to fetch".into()))),
            ..Default::default()
        };
        let store = store();
        store.borrow_mut().input = "Can I sublet?".into();

        send_message(&api, &store).await;

        let state = store.borrow();
        let replies: Vec<_> = state
            .messages
            .iter()
            .filter(|m| m.role == ChatRole::Assistant)
            .collect();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].text(), QUERY_FAILURE_REPLY);
        assert_eq!(state.error(), None);
        assert!(state.input.is_empty());
    }

    #[tokio::test]
    async fn test_upload_then_ask() {
        let api = FakeApi {
            upload_reply: Some(Ok(UploadResponse::text("Hello"))),
            query_reply: Some(Ok(QueryResponse {
                answer: Some("Hi".into()),
            })),
            ..Default::default()
        };
        let store = store();

        upload_file(&api, &store, &"a.pdf", "a.pdf".to_string()).await;
        assert_eq!(api.uploads.get(), 1);
        assert_eq!(
            store.borrow().preview,
            Some(FilePreview::new("a.pdf", "Hello"))
        );
        assert!(!store.borrow().is_processing_file());

        store.borrow_mut().input = "What does it say?".into();
        send_message(&api, &store).await;
        assert_eq!(api.queries.borrow()[0].file_content, "Hello");
    }

    #[tokio::test]
    async fn test_upload_server_error() {
        let api = FakeApi {
            upload_reply: Some(Ok(UploadResponse::error("bad file"))),
            ..Default::default()
        };
        let store = store();
        store.borrow_mut().preview = Some(FilePreview::new("old.pdf", "old"));

        upload_file(&api, &store, &"b.pdf", "b.pdf".to_string()).await;

        let state = store.borrow();
        assert_eq!(state.error(), Some("bad file"));
        assert_eq!(state.preview, Some(FilePreview::new("old.pdf", "old")));
    }
}
