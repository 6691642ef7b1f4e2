use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::debug;

use super::{MailError, MailTransport, OutgoingMail};
use crate::config::SmtpConfig;

/// SMTP relay transport (STARTTLS).
///
/// lettre's `SmtpTransport` is blocking, so each send runs on the blocking
/// thread pool.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let mut builder = SmtpTransport::starttls_relay(&config.host)?
            .port(config.port)
            .timeout(Some(config.timeout));
        if let Some(credentials) = &config.credentials {
            builder = builder.credentials(Credentials::new(
                credentials.username.clone(),
                credentials.password.clone(),
            ));
        }
        Ok(Self {
            transport: builder.build(),
        })
    }
}

fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(mail.from.parse::<Mailbox>()?)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_PLAIN);
    for recipient in &mail.to {
        builder = builder.to(recipient.parse::<Mailbox>()?);
    }
    Ok(builder.body(mail.body.clone())?)
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<bool, MailError> {
        let message = build_message(mail)?;
        let transport = self.transport.clone();
        debug!("Sending mail to {:?}", mail.to);

        let response = tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| MailError::Transport(format!("send task failed: {e}")))??;

        Ok(response.is_positive())
    }
}
