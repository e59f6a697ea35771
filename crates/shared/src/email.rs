//! Email service for back-office notifications.
//!
//! Uses `lettre` for SMTP transport.

use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::debug;

use crate::config::EmailConfig;

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// A fully addressed message with HTML and plain-text alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// `From` mailbox, e.g. `Ficha Cadastral <onboarding@example.com>`.
    pub from: String,
    /// Recipients.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Plain-text body.
    pub text: String,
}

/// Email service for sending notifications over SMTP.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    /// Creates a new email service.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Creates an SMTP transport.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| EmailError::SendError(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build()
            .pipe(Ok)
    }

    /// Builds the MIME message without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error if an address does not parse or the list of recipients is empty.
    pub fn build_message(message: &EmailMessage) -> Result<Message, EmailError> {
        if message.to.is_empty() {
            return Err(EmailError::InvalidAddress("no recipients".to_string()));
        }

        let mut builder = Message::builder()
            .from(parse_mailbox(&message.from)?)
            .subject(message.subject.as_str());

        for recipient in &message.to {
            builder = builder.to(parse_mailbox(recipient)?);
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                message.text.clone(),
                message.html.clone(),
            ))
            .map_err(|e| EmailError::BuildError(e.to_string()))
    }

    /// Sends a message to every recipient in one SMTP transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the email cannot be built or sent.
    pub async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let email = Self::build_message(message)?;

        let transport = self.create_transport()?;
        transport
            .send(email)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        debug!(
            subject = %message.subject,
            recipients = message.to.len(),
            "Email handed to SMTP relay"
        );

        Ok(())
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, EmailError> {
    raw.parse()
        .map_err(|e| EmailError::InvalidAddress(format!("{raw}: {e}")))
}

/// Pipe trait for fluent API.
trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
#[path = "email_tests.rs"]
mod tests;
