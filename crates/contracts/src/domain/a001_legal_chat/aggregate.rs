use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Сколько символов извлечённого текста показывать в превью файла
pub const PREVIEW_SNIPPET_CHARS: usize = 150;

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Сообщение чата
///
/// `content` is `None` only for an assistant reply whose response carried no
/// `answer` field; such a message renders as empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Создать новое сообщение
    pub fn new(role: ChatRole, content: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
        }
    }

    /// Создать сообщение пользователя
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, Some(content.into()))
    }

    /// Создать сообщение ассистента
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, Some(content.into()))
    }

    /// Ответ ассистента без поля `answer`
    pub fn assistant_missing() -> Self {
        Self::new(ChatRole::Assistant, None)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Превью последнего успешно загруженного файла
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilePreview {
    pub name: String,
    pub extracted_text: String,
}

impl FilePreview {
    pub fn new(name: impl Into<String>, extracted_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extracted_text: extracted_text.into(),
        }
    }

    pub fn has_text(&self) -> bool {
        !self.extracted_text.is_empty()
    }

    /// First `limit` characters of the extracted text followed by `...`.
    ///
    /// Counts Unicode scalar values, so the cut never splits a character.
    /// The ellipsis is appended even when the text is shorter than `limit`.
    pub fn snippet(&self, limit: usize) -> String {
        let head: String = self.extracted_text.chars().take(limit).collect();
        format!("{}...", head)
    }
}
