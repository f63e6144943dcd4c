//! Digest delivery over authenticated SMTP

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, instrument};

use newsbot_core::Digest;

use crate::digest::{render_html, render_subject};

const SMTP_HOST: &str = "smtp.gmail.com";
const SMTP_PORT: u16 = 587;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address '{address}': {message}")]
    Address { address: String, message: String },

    #[error("Failed to build message: {0}")]
    Message(String),

    #[error("SMTP transport failed: {0}")]
    Transport(String),
}

/// Sends a rendered digest to one recipient
///
/// Any failure is returned to the caller; a run without delivery is a
/// failed run.
#[async_trait]
pub trait DigestDelivery: Send + Sync {
    async fn deliver(&self, recipient: &str, digest: &Digest) -> Result<(), MailError>;
}

/// STARTTLS SMTP sender authenticated with an app password
pub struct SmtpMailer {
    user: String,
    password: String,
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(user: String, password: String) -> Self {
        Self {
            user,
            password,
            host: SMTP_HOST.to_string(),
            port: SMTP_PORT,
        }
    }

    /// Use a different relay
    pub fn with_relay(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    fn mailbox(address: &str) -> Result<Mailbox, MailError> {
        address.parse().map_err(|e: lettre::address::AddressError| MailError::Address {
            address: address.to_string(),
            message: e.to_string(),
        })
    }

    /// Build the single-part HTML message for `digest`
    fn build_message(&self, recipient: &str, digest: &Digest) -> Result<Message, MailError> {
        Message::builder()
            .from(Self::mailbox(&self.user)?)
            .to(Self::mailbox(recipient)?)
            .subject(render_subject(digest))
            .header(ContentType::TEXT_HTML)
            .body(render_html(digest))
            .map_err(|e| MailError::Message(e.to_string()))
    }
}

#[async_trait]
impl DigestDelivery for SmtpMailer {
    #[instrument(skip(self, digest), fields(host = %self.host, articles = digest.len()))]
    async fn deliver(&self, recipient: &str, digest: &Digest) -> Result<(), MailError> {
        let message = self.build_message(recipient, digest)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(self.port)
            .credentials(Credentials::new(self.user.clone(), self.password.clone()))
            .build();

        transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        info!("Digest sent to {}", recipient);
        Ok(())
    }
}
