//! Backend Error Module
//!
//! Error types used by handlers, the auth middleware and the store accessors.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation
//!
//! - Authorization failures are produced by the auth middleware and never
//!   reach business logic.
//! - Ownership and existence failures are produced by the chat handlers when
//!   a scoped query matches nothing.
//! - Everything else bubbles up through `?` and becomes a 500.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError};
