//! Sandbox payment processor configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payments configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsConfig {
    /// Largest amount the sandbox processor approves.
    #[serde(default = "default_approval_limit")]
    pub approval_limit: Decimal,
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            approval_limit: default_approval_limit(),
        }
    }
}

fn default_approval_limit() -> Decimal {
    Decimal::new(10_000, 0)
}
