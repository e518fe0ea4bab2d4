//! Clock Port (Driven Port)
//!
//! Source of the current local time. Rules that depend on "now" read it
//! through this port so tests can pin the instant.

use chrono::NaiveDateTime;

/// Port for reading the current time.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}
