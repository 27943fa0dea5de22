//! Backend Module
//!
//! This module contains all server-side code for the Ermin chat backend.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - login, email verification, JWT sessions
//! - **`chat`** - owner-scoped chat threads and messages
//! - **`status`** - status check records and the API greeting
//! - **`mail`** - verification mail delivery
//! - **`middleware`** - bearer authentication
//! - **`error`** - backend error types and their HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Configuration and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── chat/           - Chat storage and handlers
//! ├── status/         - Status checks
//! ├── mail/           - Mailers
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. The error converts itself into
//! a JSON response `{"error": ..., "status": ...}` with the matching status
//! code; internal details are logged and never sent to clients.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Chat threads and messages
pub mod chat;

/// Status check records
pub mod status;

/// Verification mail delivery
pub mod mail;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use routes::create_router;
pub use server::{build_state, AppConfig, AppState};
