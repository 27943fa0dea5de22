//! Ermin Chat - Main Library
//!
//! Ermin Chat is a small chat-history backend: Google-OAuth-backed login,
//! JWT session issuance, and per-user chat threads with their messages.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared with clients
//!   - Chat threads and messages, request/response bodies
//!   - Validation error type
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and router
//!   - Authentication (login, email verification, JWT sessions)
//!   - Ownership-scoped chat storage (SQLite via sqlx)
//!   - Verification mail delivery
//!
//! # Usage
//!
//! ```rust,no_run
//! use ermin_chat::backend::server::{build_state, config::AppConfig};
//! use ermin_chat::backend::routes::create_router;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let state = build_state(config).await?;
//! let app = create_router(state);
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state is immutable after startup. The token service, mailer and
//! configuration are shared behind `Arc`; the database pool is a cloneable
//! handle. There are no cross-request locks.
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::SharedError` for input validation
//! - `backend::error::BackendError` for everything that becomes an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
