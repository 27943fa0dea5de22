/**
 * SMTP Mailer
 *
 * Sends verification codes through an authenticated STARTTLS relay.
 */

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::backend::mail::{verification_body, MailError, Mailer, VERIFICATION_SUBJECT};
use crate::backend::server::config::SmtpConfig;

/// Mailer that delivers through an SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build the transport. No connection is opened until the first send.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config.username.parse::<Mailbox>()?;

        Ok(Self { transport, from })
    }

    fn verification_message(&self, email: &str, code: &str) -> Result<Message, MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(email.parse::<Mailbox>()?)
            .subject(VERIFICATION_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(verification_body(code))?;
        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_verification(&self, email: &str, code: &str) -> Result<(), MailError> {
        let message = self.verification_message(email, code)?;
        self.transport.send(message).await?;
        tracing::info!("Verification email sent to {}", email);
        Ok(())
    }
}
