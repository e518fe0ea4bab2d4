//! Email Port (Driven Port)
//!
//! Interface for delivering transactional email.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::shared::EmailAddress;

/// An email to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl EmailMessage {
    /// Create a message.
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Email delivery error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailError {
    /// Delivery failed.
    #[error("Email delivery to {recipient} failed: {message}")]
    DeliveryFailed {
        /// Recipient address.
        recipient: String,
        /// Error details.
        message: String,
    },
}

/// Port for sending email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailPort: Send + Sync {
    /// Deliver `message` to `to`.
    async fn send_email(&self, to: &EmailAddress, message: &EmailMessage)
    -> Result<(), EmailError>;
}
