//! Authentication Module
//!
//! This module handles identity-provider login, email verification and
//! session credentials.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── users.rs         - User model and database operations
//! ├── sessions.rs      - JWT token management
//! ├── verification.rs  - Verification code generation
//! ├── flow.rs          - Login and verification flows
//! └── handlers/        - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: identity provider data → user created on first sight → JWT returned
//! 2. **Verify Email**: code from the mail → user marked verified, code cleared
//! 3. **Get Me**: JWT → user info
//!
//! # Security
//!
//! - JWT tokens are stateless and expire after 30 days
//! - Verification codes are 256-bit random values, usable once
//! - All credential failures return the same 401

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Verification code generation
pub mod verification;

/// Login and verification flows
pub mod flow;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, UserResponse};
pub use handlers::{get_me, login, verify_email};
pub use sessions::TokenService;
pub use users::User;
