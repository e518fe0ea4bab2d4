//! Shipping quotes served from a fixed per-destination table.

use std::collections::BTreeMap;

use crate::application::ports::{ShippingError, ShippingPort};
use crate::domain::shipping::ShippingQuote;

/// Shipping provider backed by the `shipping.destinations` config table.
///
/// Destination names match case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredShippingRates {
    destinations: BTreeMap<String, ShippingQuote>,
}

impl ConfiguredShippingRates {
    /// Create a provider from a destination table.
    #[must_use]
    pub fn new(destinations: BTreeMap<String, ShippingQuote>) -> Self {
        Self {
            destinations: destinations
                .into_iter()
                .map(|(name, quote)| (name.to_lowercase(), quote))
                .collect(),
        }
    }
}

impl ShippingPort for ConfiguredShippingRates {
    fn get_shipping_quote(
        &self,
        destination: &str,
    ) -> Result<Option<ShippingQuote>, ShippingError> {
        Ok(self
            .destinations
            .get(&destination.trim().to_lowercase())
            .copied())
    }
}
