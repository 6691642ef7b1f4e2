use async_trait::async_trait;
use tracing::info;

use super::{MailError, MailTransport, OutgoingMail};

/// Development transport: writes the message to the log instead of sending it.
/// Only used when `MAIL_TRANSPORT=log` is set explicitly.
pub struct LogMailer;

#[async_trait]
impl MailTransport for LogMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<bool, MailError> {
        info!(
            from = %mail.from,
            to = ?mail.to,
            subject = %mail.subject,
            "Mail not sent (MAIL_TRANSPORT=log):\n{}",
            mail.body
        );
        Ok(true)
    }
}
