//! Integration tests for store hours and the holiday discount.
//!
//! The clock is injected, so each case pins the instant it needs.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront::StoreStatusService;
use storefront::domain::promotions::HolidayPromotion;
use storefront::domain::store_hours::StoreHours;
use storefront::infrastructure::clock::FixedClock;
use test_case::test_case;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap()
}

fn status_at(now: NaiveDateTime) -> StoreStatusService<FixedClock> {
    StoreStatusService::with_defaults(Arc::new(FixedClock::new(now)))
}

#[test_case(7, 59, false ; "before opening")]
#[test_case(8, 0, true ; "at opening")]
#[test_case(19, 59, true ; "before closing")]
#[test_case(20, 0, false ; "at closing")]
#[test_case(20, 1, false ; "after closing")]
fn test_is_online(hour: u32, minute: u32, expected: bool) {
    assert_eq!(status_at(at(2024, 1, 1, hour, minute)).is_online(), expected);
}

#[test_case(at(2024, 12, 25, 0, 0), dec!(0.2) ; "christmas start")]
#[test_case(at(2024, 12, 25, 23, 59), dec!(0.2) ; "christmas end")]
#[test_case(at(2024, 12, 24, 23, 59), Decimal::ZERO ; "christmas eve")]
#[test_case(at(2024, 12, 26, 0, 0), Decimal::ZERO ; "day after christmas")]
fn test_get_discount(now: NaiveDateTime, expected: Decimal) {
    assert_eq!(status_at(now).get_discount(), expected);
}

#[test]
fn test_configured_window_and_promotion() {
    let service = StoreStatusService::new(
        Arc::new(FixedClock::new(at(2025, 11, 28, 6, 0))),
        StoreHours::new(6, 23),
        HolidayPromotion {
            month: 11,
            day: 28,
            rate: dec!(0.5),
        },
    );

    assert!(service.is_online());
    assert_eq!(service.get_discount(), dec!(0.5));
}
