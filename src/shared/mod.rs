//! Shared Module
//!
//! Types exchanged with clients over the JSON API. They carry no storage
//! concerns; the backend maps its database rows into them.

/// Chat thread and message types
pub mod chat;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use chat::{
    AddMessageRequest, Chat, ChatMessage, CreateChatRequest, MessageResponse, MessagesResponse,
    UpdateChatRequest, DEFAULT_CHAT_TITLE,
};
pub use error::SharedError;
