//! Payment Port (Driven Port)
//!
//! Interface for charging a payment instrument.

use async_trait::async_trait;

use crate::domain::ordering::{ChargeResult, PaymentInstrument};
use crate::domain::shared::Money;

/// Payment processor error.
///
/// A declined charge is not an error: it comes back as
/// `ChargeStatus::Failed`. These variants cover the processor itself failing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    /// Connection error.
    #[error("Payment processor connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Processor returned something unusable.
    #[error("Payment processor error: {message}")]
    ProcessorError {
        /// Error details.
        message: String,
    },
}

/// Port for payment processing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentPort: Send + Sync {
    /// Charge `amount` to `instrument`.
    async fn charge(
        &self,
        instrument: &PaymentInstrument,
        amount: Money,
    ) -> Result<ChargeResult, PaymentError>;
}
