//! Legal Chat - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::a001_legal_chat::{
    QueryRequest, QueryResponse, UploadResponse, QUERY_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use thiserror::Error;

/// Failure to complete a request to the assistant service.
///
/// `Display` is what ends up in the error banner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("Invalid response: {0}")]
    Decode(String),
    #[error("Browser window is not available")]
    NoWindow,
}

/// Remote collaborator behind `/upload` and `/query`.
#[allow(async_fn_in_trait)]
pub trait ChatApi {
    type File;

    async fn upload_file(&self, file: &Self::File) -> Result<UploadResponse, ApiError>;

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError>;
}

/// Browser `fetch` client
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpChatApi;

impl ChatApi for HttpChatApi {
    type File = web_sys::File;

    async fn upload_file(&self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        upload_file(file).await
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
        send_query(request).await
    }
}

/// Turn a JS exception into an `ApiError`, keeping `error.message` when
/// the value is an `Error` (e.g. "Failed to fetch")
fn js_err(e: wasm_bindgen::JsValue) -> ApiError {
    use wasm_bindgen::JsCast;

    let message = e
        .as_string()
        .or_else(|| {
            e.dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{e:?}"));
    ApiError::Network(message)
}

/// Run a prepared request and decode the JSON body.
///
/// The status code is not checked: the service reports failures in the body.
async fn fetch_json<T: serde::de::DeserializeOwned>(
    request: &web_sys::Request,
) -> Result<T, ApiError> {
    use wasm_bindgen::JsCast;
    use web_sys::Response;

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;

    if !resp.ok() {
        log::debug!("{} answered HTTP {}", resp.url(), resp.status());
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let text: String = text
        .as_string()
        .ok_or_else(|| ApiError::Decode("body is not text".to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Загрузить файл: multipart с единственным полем `file`
pub async fn upload_file(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    use web_sys::{FormData, Request, RequestInit, RequestMode};

    let form_data = FormData::new().map_err(js_err)?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url(UPLOAD_PATH);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;

    fetch_json(&request).await
}

/// Отправить вопрос вместе с извлечённым текстом
pub async fn send_query(query: &QueryRequest) -> Result<QueryResponse, ApiError> {
    use web_sys::{Request, RequestInit, RequestMode};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let body = serde_json::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = api_url(QUERY_PATH);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    fetch_json(&request).await
}
