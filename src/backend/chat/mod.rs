//! Chat Backend Module
//!
//! Server-side chat history: per-user threads with ordered messages,
//! persisted in SQLite.
//!
//! # Architecture
//!
//! - **`db`** - owner-scoped database operations
//! - **`handlers`** - HTTP handlers for /api/chats
//!
//! # Example
//!
//! ```rust,no_run
//! use ermin_chat::backend::chat::db;
//! use ermin_chat::backend::server::config::connect_database;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let pool = connect_database("sqlite::memory:").await?;
//! let chat = db::create_chat(&pool, "user-1", None).await?;
//! db::append_message(&pool, "user-1", &chat.id, "user", "Hallo!").await?;
//! # Ok(())
//! # }
//! ```

/// Database operations for chat threads and messages
pub mod db;

/// HTTP handlers
pub mod handlers;
