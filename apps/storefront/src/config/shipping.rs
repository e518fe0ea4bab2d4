//! Shipping table served by the configured shipping adapter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::shipping::ShippingQuote;

/// Shipping configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShippingConfig {
    /// Quote per destination. Destinations not listed are not served.
    #[serde(default)]
    pub destinations: BTreeMap<String, ShippingQuote>,
}
