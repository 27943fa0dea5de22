//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS and tracing layers
//! ├── api_routes.rs   - Public endpoints
//! └── chat_routes.rs  - Endpoints behind the auth middleware
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use ermin_chat::backend::routes::create_router;
//! use ermin_chat::backend::server::{build_state, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = build_state(AppConfig::from_env()?).await?;
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Protected route configuration
pub mod chat_routes;

/// Public route configuration
pub mod api_routes;

pub use router::create_router;
