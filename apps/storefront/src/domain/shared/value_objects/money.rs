//! Money value object for prices, costs and charge amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

use crate::domain::shared::DomainError;

/// A monetary amount.
///
/// Represented as a Decimal so conversions stay exact. Whole amounts display
/// without a fractional part (`$10`), anything else rounded half away from
/// zero to two decimals (`$10.50`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Check that the amount can be charged or quoted.
    ///
    /// # Errors
    ///
    /// Returns error if the amount is negative.
    pub fn validate_non_negative(&self, field: &str) -> Result<(), DomainError> {
        if self.is_negative() {
            return Err(DomainError::InvalidValue {
                field: field.to_string(),
                message: format!("amount cannot be negative: {}", self.0),
            });
        }
        Ok(())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if cents.fract().is_zero() {
            write!(f, "${}", cents.normalize())
        } else {
            write!(f, "${cents:.2}")
        }
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn whole_amount_displays_without_decimals() {
        assert_eq!(Money::from_units(10).to_string(), "$10");
        assert_eq!(Money::new(dec!(10.00)).to_string(), "$10");
    }

    #[test]
    fn fractional_amount_displays_two_decimals() {
        assert_eq!(Money::new(dec!(10.5)).to_string(), "$10.50");
        assert_eq!(Money::new(dec!(0.99)).to_string(), "$0.99");
    }

    #[test]
    fn display_rounds_to_cents() {
        assert_eq!(Money::new(dec!(9.994)).to_string(), "$9.99");
        assert_eq!(Money::new(dec!(9.995)).to_string(), "$10");
        assert_eq!(Money::new(dec!(9.999)).to_string(), "$10");
        assert_eq!(Money::new(dec!(14.505)).to_string(), "$14.51");
    }

    #[test]
    fn multiply_by_rate() {
        let converted = Money::from_units(10) * dec!(1.5);
        assert_eq!(converted.amount(), dec!(15));
    }

    #[test]
    fn ordering() {
        assert!(Money::from_units(5) < Money::from_units(6));
        assert_eq!(Money::default(), Money::ZERO);
    }

    #[test]
    fn negative_amount_rejected() {
        let result = Money::from_units(-1).validate_non_negative("total_amount");
        assert!(matches!(result, Err(DomainError::InvalidValue { .. })));
        assert!(Money::ZERO.validate_non_negative("total_amount").is_ok());
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&Money::new(dec!(12.5))).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.amount(), dec!(12.5));
    }
}
