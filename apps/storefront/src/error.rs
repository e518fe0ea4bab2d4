//! Stable error codes for the storefront.
//!
//! Workflows that handle a failure locally report it as one of these codes
//! instead of an error value.
//!
//! | Code | Reason | Raised by |
//! |------|--------|-----------|
//! | `PaymentError` | `payment_error` | order submission when the charge is not successful |
//! | `InvalidEmail` | `invalid_email` | sign-up with a malformed address |
//! | `InvalidCurrency` | `invalid_currency` | price conversion with a malformed currency code |
//! | `ShippingUnavailable` | `shipping_unavailable` | shipping lookup without a quote |

use serde::{Deserialize, Serialize};

/// Error codes exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Payment processor did not report success.
    PaymentError,
    /// Email address failed validation.
    InvalidEmail,
    /// Currency code failed validation.
    InvalidCurrency,
    /// No shipping quote for the destination.
    ShippingUnavailable,
}

impl ErrorCode {
    /// Get the reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::PaymentError => "payment_error",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidCurrency => "invalid_currency",
            Self::ShippingUnavailable => "shipping_unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}
