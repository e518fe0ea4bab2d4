//! Promotion configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::promotions::HolidayPromotion;

/// Promotions configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PromotionsConfig {
    /// Yearly single-day discount.
    #[serde(default)]
    pub holiday: HolidayConfig,
}

/// A yearly single-day discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayConfig {
    /// Month (1-12).
    #[serde(default = "default_month")]
    pub month: u32,
    /// Day of month.
    #[serde(default = "default_day")]
    pub day: u32,
    /// Discount as a fraction between 0 and 1.
    #[serde(default = "default_rate")]
    pub rate: Decimal,
}

impl HolidayConfig {
    /// Domain view of this promotion.
    #[must_use]
    pub const fn to_promotion(&self) -> HolidayPromotion {
        HolidayPromotion {
            month: self.month,
            day: self.day,
            rate: self.rate,
        }
    }
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            month: default_month(),
            day: default_day(),
            rate: default_rate(),
        }
    }
}

const fn default_month() -> u32 {
    12
}

const fn default_day() -> u32 {
    25
}

fn default_rate() -> Decimal {
    dec!(0.2)
}
