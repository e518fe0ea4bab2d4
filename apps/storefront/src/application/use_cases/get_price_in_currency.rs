//! Get Price In Currency Use Case

use std::sync::Arc;

use crate::application::ports::{ExchangeRateError, ExchangeRatePort};
use crate::domain::shared::{CurrencyCode, DomainError, Money};
use crate::error::ErrorCode;

/// Price conversion error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    /// The currency code was malformed; no rate was requested.
    #[error(transparent)]
    InvalidCurrency(#[from] DomainError),

    /// The rate source failed.
    #[error(transparent)]
    ExchangeRate(#[from] ExchangeRateError),
}

/// Use case for converting a price into another currency.
pub struct GetPriceInCurrencyUseCase<R>
where
    R: ExchangeRatePort,
{
    rates: Arc<R>,
}

impl<R> GetPriceInCurrencyUseCase<R>
where
    R: ExchangeRatePort,
{
    /// Create a new GetPriceInCurrencyUseCase.
    pub const fn new(rates: Arc<R>) -> Self {
        Self { rates }
    }

    /// Convert `price` into `currency` at the current rate.
    ///
    /// The result is `price * rate` with no rounding.
    pub fn execute(&self, price: Money, currency: &str) -> Result<Money, PricingError> {
        let currency = CurrencyCode::parse(currency).inspect_err(|e| {
            tracing::warn!(code = %ErrorCode::InvalidCurrency, error = %e, "Rejected currency code");
        })?;

        let rate = self.rates.get_exchange_rate(&currency)?;
        let converted = price * rate;

        tracing::debug!(%price, %currency, %rate, %converted, "Converted price");
        Ok(converted)
    }
}
