//! Daily window in which the store is online.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Opening hours as whole hours of the local day.
///
/// Online from `opening_hour:00` inclusive until `closing_hour:00` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHours {
    /// First online hour (0-23).
    pub opening_hour: u32,
    /// Hour at which the store goes offline (1-24).
    pub closing_hour: u32,
}

impl StoreHours {
    /// Create a window.
    #[must_use]
    pub const fn new(opening_hour: u32, closing_hour: u32) -> Self {
        Self {
            opening_hour,
            closing_hour,
        }
    }

    /// Whether the store is online at the given local time.
    #[must_use]
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        (self.opening_hour..self.closing_hour).contains(&at.hour())
    }
}

impl Default for StoreHours {
    fn default() -> Self {
        Self::new(8, 20)
    }
}
