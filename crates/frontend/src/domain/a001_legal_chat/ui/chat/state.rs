//! Legal Chat - State
//!
//! Plain state for the chat view: message history, typed input, file preview
//! and one phase per request kind. Every request gets a [`RequestToken`];
//! completions carrying a token that is no longer pending are dropped, so a
//! slow upload can't overwrite the preview of a newer one.

use super::model::ApiError;
use contracts::domain::a001_legal_chat::{
    ChatMessage, FilePreview, QueryRequest, QueryResponse, UploadResponse, QUERY_FAILURE_REPLY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Pending {
        token: RequestToken,
        file_name: String,
    },
    /// Last upload failed; the message is shown in the error banner
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Pending(RequestToken),
}

/// A query accepted by [`ChatState::begin_query`], ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub token: RequestToken,
    pub request: QueryRequest,
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub preview: Option<FilePreview>,
    pub upload: UploadPhase,
    pub query: QueryPhase,
    next_token: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.query, QueryPhase::Pending(_))
    }

    pub fn is_processing_file(&self) -> bool {
        matches!(self.upload, UploadPhase::Pending { .. })
    }

    /// Send, input and upload controls are disabled while this holds
    pub fn is_busy(&self) -> bool {
        self.is_loading() || self.is_processing_file()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.upload {
            UploadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn extracted_text(&self) -> &str {
        self.preview
            .as_ref()
            .map(|p| p.extracted_text.as_str())
            .unwrap_or("")
    }

    /// Start an upload. A still pending upload is superseded and its response
    /// will be ignored.
    pub fn begin_upload(&mut self, file_name: impl Into<String>) -> RequestToken {
        let token = self.issue_token();
        if let UploadPhase::Pending { file_name, .. } = &self.upload {
            log::debug!("Upload of '{}' superseded", file_name);
        }
        self.upload = UploadPhase::Pending {
            token,
            file_name: file_name.into(),
        };
        token
    }

    /// Apply an upload outcome. Returns `false` if the token is stale.
    pub fn complete_upload(
        &mut self,
        token: RequestToken,
        outcome: Result<UploadResponse, ApiError>,
    ) -> bool {
        let file_name = match &self.upload {
            UploadPhase::Pending {
                token: pending,
                file_name,
            } if *pending == token => file_name.clone(),
            _ => {
                log::debug!("Discarding stale upload response {:?}", token);
                return false;
            }
        };

        match outcome.map(UploadResponse::into_result) {
            Ok(Ok(text)) => {
                log::info!("Extracted {} chars from '{}'", text.len(), file_name);
                self.preview = Some(FilePreview::new(file_name, text));
                self.upload = UploadPhase::Idle;
            }
            Ok(Err(message)) => {
                log::error!("File upload error: {}", message);
                self.upload = UploadPhase::Failed(message);
            }
            Err(e) => {
                log::error!("File upload error: {}", e);
                self.upload = UploadPhase::Failed(e.to_string());
            }
        }
        true
    }

    /// Drop the pending upload, if any
    pub fn cancel_upload(&mut self) -> bool {
        if self.is_processing_file() {
            self.upload = UploadPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Accept the current input for sending.
    ///
    /// Declines when there is nothing to ask (blank input, no extracted text)
    /// or a query is already in flight. On acceptance the user message is
    /// appended right away and is never rolled back.
    pub fn begin_query(&mut self) -> Option<PendingQuery> {
        if self.is_loading() {
            return None;
        }
        if self.input.trim().is_empty() && self.extracted_text().is_empty() {
            return None;
        }

        let request = QueryRequest {
            question: self.input.clone(),
            file_content: self.extracted_text().to_string(),
        };
        self.messages.push(ChatMessage::user(self.input.clone()));

        let token = self.issue_token();
        self.query = QueryPhase::Pending(token);
        Some(PendingQuery { token, request })
    }

    /// Apply a query outcome. Returns `false` if the token is stale.
    ///
    /// Failures become a fixed assistant reply; the error banner is left
    /// alone. The input is cleared either way.
    pub fn complete_query(
        &mut self,
        token: RequestToken,
        outcome: Result<QueryResponse, ApiError>,
    ) -> bool {
        if self.query != QueryPhase::Pending(token) {
            log::debug!("Discarding stale query response {:?}", token);
            return false;
        }

        let reply = match outcome {
            Ok(QueryResponse {
                answer: Some(answer),
            }) => ChatMessage::assistant(answer),
            Ok(QueryResponse { answer: None }) => {
                log::warn!("Query response carried no answer");
                ChatMessage::assistant_missing()
            }
            Err(e) => {
                log::error!("Error fetching response: {}", e);
                ChatMessage::assistant(QUERY_FAILURE_REPLY)
            }
        };
        self.messages.push(reply);
        self.settle_query();
        true
    }

    /// Drop the pending query. Its user message stays in the history.
    pub fn cancel_query(&mut self) -> bool {
        if self.is_loading() {
            self.settle_query();
            true
        } else {
            false
        }
    }

    fn settle_query(&mut self) {
        self.query = QueryPhase::Idle;
        self.input.clear();
    }

    /// Forget the preview and the error banner
    pub fn clear_file(&mut self) {
        self.preview = None;
        if matches!(self.upload, UploadPhase::Failed(_)) {
            self.upload = UploadPhase::Idle;
        }
    }
}

/// Enter sends; Shift+Enter does not
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
