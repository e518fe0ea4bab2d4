//! Login Use Case

use std::sync::Arc;

use crate::application::ports::{EmailError, EmailMessage, EmailPort, SecurityCodePort};
use crate::domain::shared::EmailAddress;

/// Subject of the security code email.
pub const LOGIN_SUBJECT: &str = "Your security code";

/// Use case for passwordless login: mail a one-time code to the customer.
pub struct LoginUseCase<C, E>
where
    C: SecurityCodePort,
    E: EmailPort,
{
    codes: Arc<C>,
    email: Arc<E>,
}

impl<C, E> LoginUseCase<C, E>
where
    C: SecurityCodePort,
    E: EmailPort,
{
    /// Create a new LoginUseCase.
    pub const fn new(codes: Arc<C>, email: Arc<E>) -> Self {
        Self { codes, email }
    }

    /// Generate a code and send it to `address`.
    ///
    /// The email body is exactly the generated code in decimal form.
    pub async fn execute(&self, address: &EmailAddress) -> Result<(), EmailError> {
        let code = self.codes.generate_code();

        let message = EmailMessage::new(LOGIN_SUBJECT, code.to_string());
        self.email.send_email(address, &message).await?;

        tracing::info!(domain = address.domain(), "Security code sent");
        Ok(())
    }
}
