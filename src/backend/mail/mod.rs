//! Verification Mail Delivery
//!
//! New accounts receive a one-time verification code by email. Delivery is
//! best-effort: callers log failures and move on.
//!
//! # Module Structure
//!
//! ```text
//! mail/
//! ├── mod.rs   - Mailer trait, log-only mailer, mailer selection
//! └── smtp.rs  - SMTP delivery via lettre
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::server::config::SmtpConfig;

/// SMTP-backed mailer
pub mod smtp;

pub use smtp::SmtpMailer;

/// Subject line of the verification mail
pub const VERIFICATION_SUBJECT: &str = "E-Mail Bestätigung - Mr Ermin Chat";

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound notification collaborator
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a verification code to `email`
    async fn send_verification(&self, email: &str, code: &str) -> Result<(), MailError>;
}

/// Mailer used when no SMTP credentials are configured
///
/// Writes the code to the log so it can still be used during development.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_verification(&self, email: &str, code: &str) -> Result<(), MailError> {
        tracing::info!("Email verification disabled. Token for {}: {}", email, code);
        Ok(())
    }
}

/// Plain-text body of the verification mail
pub fn verification_body(code: &str) -> String {
    format!(
        "Hallo!\n\n\
         Bitte bestätigen Sie Ihre E-Mail-Adresse für den Mr Ermin Chat:\n\n\
         Bestätigungscode: {code}\n\n\
         Vielen Dank!\n\
         Mr Ermin Team\n"
    )
}

/// Pick the mailer for the given configuration
///
/// Falls back to [`LogMailer`] when SMTP is not configured or the transport
/// cannot be built.
pub fn build_mailer(smtp: Option<&SmtpConfig>) -> Arc<dyn Mailer> {
    match smtp {
        Some(config) => match SmtpMailer::new(config) {
            Ok(mailer) => {
                tracing::info!("Verification mail delivery via {}:{}", config.server, config.port);
                Arc::new(mailer)
            }
            Err(e) => {
                tracing::warn!("Failed to configure SMTP transport, logging codes instead: {}", e);
                Arc::new(LogMailer)
            }
        },
        None => {
            tracing::info!("SMTP credentials not set, verification codes will be logged");
            Arc::new(LogMailer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_mailer_never_fails() {
        let result = LogMailer.send_verification("user@example.com", "abc").await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_verification_body_contains_code() {
        let body = verification_body("Xy_12-ab");
        assert!(body.contains("Bestätigungscode: Xy_12-ab"));
    }

    #[tokio::test]
    async fn test_build_mailer_without_smtp_logs() {
        let mailer = build_mailer(None);
        assert!(mailer.send_verification("user@example.com", "code").await.is_ok());
    }
}
