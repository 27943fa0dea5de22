//! Chat HTTP Handlers
//!
//! All handlers here sit behind the auth middleware and take the caller
//! from [`AuthUser`](crate::backend::middleware::AuthUser).

/// Thread CRUD handlers
pub mod threads;

/// Message append/list handlers
pub mod messages;

pub use messages::{add_message, get_messages};
pub use threads::{create_chat, delete_chat, get_chat, list_chats, update_chat};
