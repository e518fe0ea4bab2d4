//! Shipping quotes and their customer-facing description.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// Cost and delivery estimate for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// Shipping cost.
    pub cost: Money,
    /// Estimated delivery time in days.
    pub estimated_days: u32,
}

impl ShippingQuote {
    /// Create a quote.
    #[must_use]
    pub const fn new(cost: Money, estimated_days: u32) -> Self {
        Self {
            cost,
            estimated_days,
        }
    }
}

/// Text shown when no quote is available.
pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";

/// Describe a quote, or its absence, for display at checkout.
#[must_use]
pub fn describe_quote(quote: Option<&ShippingQuote>) -> String {
    match quote {
        Some(quote) => format!(
            "Shipping Cost: {} ({} Days)",
            quote.cost, quote.estimated_days
        ),
        None => SHIPPING_UNAVAILABLE.to_string(),
    }
}
