//! Orders, payment instruments and charge outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{DomainError, Money};
use crate::error::ErrorCode;

/// An order ready to be paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Order {
    total_amount: Money,
}

impl Order {
    /// Create an order for the given total.
    ///
    /// # Errors
    ///
    /// Returns error if the total is negative.
    pub fn new(total_amount: Money) -> Result<Self, DomainError> {
        total_amount.validate_non_negative("total_amount")?;
        Ok(Self { total_amount })
    }

    /// Amount to charge.
    #[must_use]
    pub const fn total_amount(&self) -> Money {
        self.total_amount
    }
}

/// Opaque payment token, e.g. a card number.
///
/// `Debug` and `Display` only reveal the last four characters.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentInstrument(String);

impl PaymentInstrument {
    /// Wrap a token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for handing to the payment processor only.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Masked form such as `****1111`.
    #[must_use]
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let visible: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("****{visible}")
    }
}

impl fmt::Debug for PaymentInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PaymentInstrument").field(&self.masked()).finish()
    }
}

impl fmt::Display for PaymentInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Status reported by the payment processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    /// The amount was captured.
    Success,
    /// Declined, or any outcome other than success.
    #[serde(other)]
    Failed,
}

impl ChargeStatus {
    /// Returns true for `Success`.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Outcome of a single charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    /// Processor status.
    pub status: ChargeStatus,
}

impl ChargeResult {
    /// A successful charge.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            status: ChargeStatus::Success,
        }
    }

    /// A failed charge.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            status: ChargeStatus::Failed,
        }
    }
}

/// Result of submitting an order.
///
/// `error` is present if and only if `success` is false; the constructors are
/// the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SubmitResult {
    /// The order was paid for.
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// The charge did not succeed.
    #[must_use]
    pub fn payment_failed() -> Self {
        Self {
            success: false,
            error: Some(ErrorCode::PaymentError.reason().to_string()),
        }
    }

    /// Whether the order was paid for.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Error code when the submission failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
