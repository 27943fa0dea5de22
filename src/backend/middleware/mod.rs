//! Middleware Module
//!
//! HTTP middleware for the backend server. Middleware functions process
//! requests before they reach handlers.
//!
//! - **`auth`** - bearer authentication for the protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use ermin_chat::backend::middleware::{auth_middleware, AuthUser};
//! use ermin_chat::backend::server::AppState;
//!
//! async fn whoami(AuthUser(user): AuthUser) -> String {
//!     user.id
//! }
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/api/whoami", get(whoami))
//!         .route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, bearer_token, AuthUser};
