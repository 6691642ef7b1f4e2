//! Mail bridge: turns contact form submissions into an outgoing message and
//! hands it to whichever [`MailTransport`] the app was started with.
//!
//! The message always goes from the operator address to the operator address.
//! The visitor's own address is never asked for.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{MailBackend, MailConfig};

pub mod log;
pub mod smtp;

pub use self::log::LogMailer;
pub use self::smtp::SmtpMailer;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

/// A plain-text message ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub to: Vec<String>,
}

/// Anything able to deliver an [`OutgoingMail`].
///
/// `Ok(true)` means the transport accepted the message, `Ok(false)` that it
/// refused it without failing.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<bool, MailError>;
}

/// Builds the transport selected by `config.backend`.
pub fn transport_for(config: &MailConfig) -> Result<Arc<dyn MailTransport>, MailError> {
    match &config.backend {
        MailBackend::Smtp(smtp) => {
            let mailer = SmtpMailer::new(smtp)?;
            info!("Mail transport: SMTP relay {}:{}", smtp.host, smtp.port);
            Ok(Arc::new(mailer))
        }
        MailBackend::Log => {
            warn!("MAIL_TRANSPORT=log: contact messages are only logged, never delivered");
            Ok(Arc::new(LogMailer))
        }
    }
}

#[derive(Clone)]
pub struct MailBridge {
    sender: String,
    fail_silently: bool,
    transport: Arc<dyn MailTransport>,
}

impl MailBridge {
    pub fn new(config: &MailConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            sender: config.sender.clone(),
            fail_silently: config.fail_silently,
            transport,
        }
    }

    /// Subject is the submitted name, body the submitted message, both passed
    /// through untouched.
    pub fn contact_mail(&self, name: &str, message: &str) -> OutgoingMail {
        OutgoingMail {
            subject: name.to_string(),
            body: message.to_string(),
            from: self.sender.clone(),
            to: vec![self.sender.clone()],
        }
    }

    pub async fn send_contact(&self, name: &str, message: &str) -> Result<bool, MailError> {
        let mail = self.contact_mail(name, message);
        match self.transport.send(&mail).await {
            Ok(true) => {
                info!("Contact message from {name:?} delivered to {}", self.sender);
                Ok(true)
            }
            Ok(false) => {
                warn!("Mail transport refused contact message from {name:?}");
                Ok(false)
            }
            Err(e) if self.fail_silently => {
                warn!("Dropping contact message after transport error: {e}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
