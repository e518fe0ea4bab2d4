//! Domain Layer
//!
//! Pure storefront rules. Nothing in here calls a collaborator or reads the
//! clock; callers pass in whatever the rules need.
//!
//! # Contexts
//!
//! - `intro`: numeric helpers (`max`, `fizz_buzz`)
//! - `ordering`: orders, payment instruments and charge outcomes
//! - `shipping`: shipping quotes and their customer-facing description
//! - `store_hours`: the daily window in which the store is online
//! - `promotions`: calendar-day discounts
//! - `shared`: value objects used across contexts

pub mod intro;
pub mod ordering;
pub mod promotions;
pub mod shared;
pub mod shipping;
pub mod store_hours;
