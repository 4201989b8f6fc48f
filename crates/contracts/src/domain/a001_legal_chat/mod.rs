//! Legal assistant chat: message history records and the `/upload` + `/query`
//! wire format.

pub mod aggregate;
pub mod dto;

pub use aggregate::{ChatMessage, ChatRole, FilePreview, PREVIEW_SNIPPET_CHARS};
pub use dto::{
    QueryRequest, QueryResponse, UploadResponse, QUERY_FAILURE_REPLY, QUERY_PATH, UPLOAD_FIELD,
    UPLOAD_PATH,
};
