//! Chat Thread Data Structures
//!
//! A chat thread belongs to exactly one user and holds its messages in the
//! order they were appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to threads created without one
pub const DEFAULT_CHAT_TITLE: &str = "Neuer Chat";

/// A single message inside a chat thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Conversational role, usually "user" or "assistant" (not validated)
    pub role: String,
    /// Message text
    pub content: String,
    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

/// A chat thread with its messages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chat {
    pub id: String,
    /// Owning user's internal ID
    pub user_id: String,
    pub title: String,
    /// Messages in append order
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    /// Bumped on title changes and on every appended message
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/chats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateChatRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `PUT /api/chats/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateChatRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `POST /api/chats/{id}/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMessageRequest {
    pub role: String,
    pub content: String,
}

/// Response of `GET /api/chats/{id}/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<ChatMessage>,
}

/// Plain acknowledgement body, e.g. `{"message": "Chat deleted successfully"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_title_is_optional() {
        let request: CreateChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());

        let request: CreateChatRequest =
            serde_json::from_str(r#"{"title":"Diskussion über KI-Entwicklung"}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("Diskussion über KI-Entwicklung"));
    }

    #[test]
    fn test_chat_without_messages_field_deserializes() {
        let json = r#"{
            "id": "c1",
            "user_id": "u1",
            "title": "Neuer Chat",
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        }"#;
        let chat: Chat = serde_json::from_str(json).unwrap();
        assert!(chat.messages.is_empty());
        assert_eq!(chat.title, DEFAULT_CHAT_TITLE);
    }
}
