//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs           - Module exports and documentation
//! ├── types.rs         - Request and response types
//! ├── login.rs         - Identity-provider login
//! ├── verify_email.rs  - Verification code consumption
//! └── me.rs            - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /api/auth/login
//! - **`verify_email`** - POST /api/auth/verify-email?token=...
//! - **`get_me`** - GET /api/auth/me (protected)

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Email verification handler
pub mod verify_email;

/// Get current user handler
pub mod me;

pub use types::{AuthResponse, LoginRequest, UserResponse, VerifyEmailQuery};

pub use login::login;
pub use me::get_me;
pub use verify_email::verify_email;
