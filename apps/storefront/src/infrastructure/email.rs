//! Email sender that records deliveries in the log instead of sending them.

use async_trait::async_trait;

use crate::application::ports::{EmailError, EmailMessage, EmailPort};
use crate::domain::shared::EmailAddress;

/// Email adapter for local runs.
///
/// Logs recipient and subject. The body is never logged because login emails
/// carry a security code.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailPort for LoggingEmailSender {
    async fn send_email(
        &self,
        to: &EmailAddress,
        message: &EmailMessage,
    ) -> Result<(), EmailError> {
        tracing::info!(
            recipient = %to,
            subject = %message.subject,
            body_len = message.body.len(),
            "Email delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivery_always_succeeds() {
        let to = EmailAddress::parse("name@domain.com").unwrap();
        let message = EmailMessage::new("Subject", "Body");
        assert!(LoggingEmailSender.send_email(&to, &message).await.is_ok());
    }
}
