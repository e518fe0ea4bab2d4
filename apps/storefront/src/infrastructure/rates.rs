//! Exchange rates served from a fixed table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::application::ports::{ExchangeRateError, ExchangeRatePort};
use crate::domain::shared::CurrencyCode;

/// Exchange rate provider backed by the `exchange_rates` config table.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredExchangeRates {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl ConfiguredExchangeRates {
    /// Create a provider from a rate table.
    #[must_use]
    pub const fn new(rates: BTreeMap<CurrencyCode, Decimal>) -> Self {
        Self { rates }
    }

    /// Currencies this provider knows.
    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.keys()
    }
}

impl ExchangeRatePort for ConfiguredExchangeRates {
    fn get_exchange_rate(&self, currency: &CurrencyCode) -> Result<Decimal, ExchangeRateError> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| ExchangeRateError::UnknownCurrency {
                currency: currency.to_string(),
            })
    }
}
