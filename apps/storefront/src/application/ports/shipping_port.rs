//! Shipping Port (Driven Port)
//!
//! Interface for requesting shipping quotes.

use crate::domain::shipping::ShippingQuote;

/// Shipping provider error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShippingError {
    /// Provider could not be reached.
    #[error("Shipping provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for shipping quotes.
#[cfg_attr(test, mockall::automock)]
pub trait ShippingPort: Send + Sync {
    /// Quote for a destination; `None` when the destination is not served.
    fn get_shipping_quote(&self, destination: &str)
    -> Result<Option<ShippingQuote>, ShippingError>;
}
