use serde::{Deserialize, Serialize};

pub const UPLOAD_PATH: &str = "/upload";
pub const QUERY_PATH: &str = "/query";

/// Multipart field carrying the selected file
pub const UPLOAD_FIELD: &str = "file";

/// Reply appended to the history when a query fails to complete
pub const QUERY_FAILURE_REPLY: &str = "Error processing request.";

/// Ответ `POST /upload`
///
/// Success carries `text`, failure carries `error`. The HTTP status is not
/// part of the contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            text: None,
            error: Some(error.into()),
        }
    }

    /// Extracted text, or the server's error message.
    ///
    /// Only a non-empty `error` counts as failure; a missing `text` on success
    /// yields an empty string.
    pub fn into_result(self) -> Result<String, String> {
        match self.error {
            Some(error) if !error.is_empty() => Err(error),
            _ => Ok(self.text.unwrap_or_default()),
        }
    }
}

/// Тело `POST /query`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub question: String,
    pub file_content: String,
}

/// Ответ `POST /query`
///
/// Any other field the server sends (an `error`, for instance) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_success() {
        let resp: UploadResponse = serde_json::from_str(r#"{"text":"Hello"}"#).unwrap();
        assert_eq!(resp.into_result(), Ok("Hello".to_string()));
    }

    #[test]
    fn test_upload_error_wins() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"text":"ignored","error":"bad file"}"#).unwrap();
        assert_eq!(resp.into_result(), Err("bad file".to_string()));
    }

    #[test]
    fn test_upload_empty_error_is_not_failure() {
        let resp: UploadResponse = serde_json::from_str(r#"{"text":"ok","error":""}"#).unwrap();
        assert_eq!(resp.into_result(), Ok("ok".to_string()));

        let resp: UploadResponse = serde_json::from_str(r#"{"error":null}"#).unwrap();
        assert_eq!(resp.into_result(), Ok(String::new()));
    }

    #[test]
    fn test_query_request_wire_names() {
        let req = QueryRequest {
            question: "Is this binding?".into(),
            file_content: String::new(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"question": "Is this binding?", "fileContent": ""})
        );
    }

    #[test]
    fn test_query_response_tolerates_error_body() {
        let resp: QueryResponse =
            serde_json::from_str(r#"{"error":"Question or file content is required"}"#).unwrap();
        assert_eq!(resp.answer, None);

        let resp: QueryResponse = serde_json::from_str(r#"{"answer":"Yes."}"#).unwrap();
        assert_eq!(resp.answer.as_deref(), Some("Yes."));
    }
}
