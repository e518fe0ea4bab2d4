//! Calendar-day discounts.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A discount that applies for one calendar day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPromotion {
    /// Month (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Fraction taken off, e.g. 0.2 for 20%.
    pub rate: Decimal,
}

impl HolidayPromotion {
    /// Discount on the given date: `rate` on the holiday, zero otherwise.
    #[must_use]
    pub fn discount_on(&self, date: NaiveDate) -> Decimal {
        if date.month() == self.month && date.day() == self.day {
            self.rate
        } else {
            Decimal::ZERO
        }
    }
}

impl Default for HolidayPromotion {
    /// Christmas Day, 20% off.
    fn default() -> Self {
        Self {
            month: 12,
            day: 25,
            rate: dec!(0.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn applies_on_the_holiday() {
        let promo = HolidayPromotion::default();
        assert_eq!(promo.discount_on(date(2024, 12, 25)), dec!(0.2));
        assert_eq!(promo.discount_on(date(2031, 12, 25)), dec!(0.2));
    }

    #[test]
    fn zero_around_the_holiday() {
        let promo = HolidayPromotion::default();
        assert_eq!(promo.discount_on(date(2024, 12, 24)), Decimal::ZERO);
        assert_eq!(promo.discount_on(date(2024, 12, 26)), Decimal::ZERO);
        assert_eq!(promo.discount_on(date(2024, 11, 25)), Decimal::ZERO);
    }

    #[test]
    fn leap_day_promotion() {
        let promo = HolidayPromotion {
            month: 2,
            day: 29,
            rate: dec!(0.1),
        };
        assert_eq!(promo.discount_on(date(2024, 2, 29)), dec!(0.1));
        assert_eq!(promo.discount_on(date(2023, 2, 28)), Decimal::ZERO);
    }
}
