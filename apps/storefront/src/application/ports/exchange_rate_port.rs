//! Exchange Rate Port (Driven Port)
//!
//! Interface for looking up currency exchange rates.

use rust_decimal::Decimal;

use crate::domain::shared::CurrencyCode;

/// Exchange rate lookup error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExchangeRateError {
    /// No rate is known for the currency.
    #[error("No exchange rate for currency: {currency}")]
    UnknownCurrency {
        /// The requested currency.
        currency: String,
    },

    /// Rate source could not be reached.
    #[error("Exchange rate source unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for exchange rate lookups.
#[cfg_attr(test, mockall::automock)]
pub trait ExchangeRatePort: Send + Sync {
    /// Rate to multiply a base-currency price by to get the price in `currency`.
    fn get_exchange_rate(&self, currency: &CurrencyCode) -> Result<Decimal, ExchangeRateError>;
}
