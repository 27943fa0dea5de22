//! Shared Error Types
//!
//! Validation failures detected on request bodies before anything touches the
//! store.
//!
//! # Usage
//!
//! ```rust
//! use ermin_chat::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Reject email addresses that are obviously malformed.
///
/// The identity provider already vouched for the address; this only catches
/// clients that send garbage in the field.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let valid = match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(SharedError::validation("email", "Invalid email format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("token", "must not be empty");
        let display = format!("{}", error);
        assert!(display.contains("token"));
        assert!(display.contains("must not be empty"));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ermin@example.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.de").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("user@.com").is_err());
    }
}
