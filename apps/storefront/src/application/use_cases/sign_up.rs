//! Sign Up Use Case

use std::sync::Arc;

use crate::application::ports::{EmailError, EmailMessage, EmailPort};
use crate::domain::shared::EmailAddress;
use crate::error::ErrorCode;

/// Subject of the welcome email.
pub const WELCOME_SUBJECT: &str = "Welcome aboard!";

/// Use case for registering a new customer by email.
pub struct SignUpUseCase<E>
where
    E: EmailPort,
{
    email: Arc<E>,
}

impl<E> SignUpUseCase<E>
where
    E: EmailPort,
{
    /// Create a new SignUpUseCase.
    pub const fn new(email: Arc<E>) -> Self {
        Self { email }
    }

    /// Register `address` and send one welcome email.
    ///
    /// Returns `Ok(false)` without sending anything when the address is
    /// invalid.
    pub async fn execute(&self, address: &str) -> Result<bool, EmailError> {
        let Ok(recipient) = EmailAddress::parse(address) else {
            tracing::warn!(code = %ErrorCode::InvalidEmail, "Sign-up rejected");
            return Ok(false);
        };

        let message = EmailMessage::new(
            WELCOME_SUBJECT,
            format!("Welcome {recipient}! Your storefront account is ready."),
        );
        self.email.send_email(&recipient, &message).await?;

        tracing::info!(domain = recipient.domain(), "Customer signed up");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockEmailPort;

    #[tokio::test]
    async fn invalid_address_sends_nothing() {
        let mut email = MockEmailPort::new();
        email.expect_send_email().never();
        let use_case = SignUpUseCase::new(Arc::new(email));

        let result = use_case.execute("a").await.unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn valid_address_gets_one_welcome_email() {
        let mut email = MockEmailPort::new();
        email
            .expect_send_email()
            .withf(|to, message| {
                to.as_str() == "name@domain.com"
                    && message.subject.to_lowercase().contains("welcome")
                    && message.body.to_lowercase().contains("welcome")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let use_case = SignUpUseCase::new(Arc::new(email));

        let result = use_case.execute("name@domain.com").await.unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn delivery_failure_propagates() {
        let mut email = MockEmailPort::new();
        email.expect_send_email().returning(|to, _| {
            Err(EmailError::DeliveryFailed {
                recipient: to.to_string(),
                message: "relay refused".to_string(),
            })
        });
        let use_case = SignUpUseCase::new(Arc::new(email));

        assert!(use_case.execute("name@domain.com").await.is_err());
    }
}
