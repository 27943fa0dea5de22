/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend. Every handler
 * returns `Result<_, BackendError>` and the conversion module turns the error
 * into an HTTP response.
 *
 * # Error Categories
 *
 * - `Auth` - missing, invalid or expired credential, or a credential whose
 *   subject no longer exists (401)
 * - `NotFound` - resource absent or owned by someone else (404)
 * - `InvalidInput` / `SharedError` - malformed request data (400)
 * - `Internal`, `Database`, `Token`, `SerializationError` - everything
 *   unexpected (500, details logged server-side only)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned to clients for every 5xx error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Reasons a bearer credential is rejected
///
/// Callers see all of them as the same 401; the variants only exist for
/// logging and tests.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header
    #[error("missing or malformed authorization header")]
    MissingCredential,

    /// Bad signature, malformed token or expired token
    #[error("invalid or expired credential")]
    InvalidCredential,

    /// Token is valid but its subject does not resolve to a user
    #[error("credential subject does not exist")]
    UnknownSubject,
}

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use ermin_chat::backend::error::BackendError;
///
/// let err = BackendError::not_found("Chat not found");
/// let err = BackendError::invalid_input("Invalid verification token");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Authentication failure
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Resource missing or not owned by the caller
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Request data rejected
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure with a server-side description
    #[error("Internal error: {message}")]
    Internal {
        /// Description for the logs, never sent to clients
        message: String,
    },

    /// Validation error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidInput { .. } | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. }
            | Self::Database(_)
            | Self::Token(_)
            | Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to show to the caller
    ///
    /// Internal errors collapse to [`INTERNAL_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        match self {
            Self::Auth(_) => "Invalid authentication credentials".to_string(),
            Self::NotFound { message } | Self::InvalidInput { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::Internal { .. }
            | Self::Database(_)
            | Self::Token(_)
            | Self::SerializationError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
