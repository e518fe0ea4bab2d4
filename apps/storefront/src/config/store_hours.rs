//! Store hours configuration.

use serde::{Deserialize, Serialize};

use crate::domain::store_hours::StoreHours;

/// Daily online window, in whole local hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHoursConfig {
    /// First online hour.
    #[serde(default = "default_opening_hour")]
    pub opening_hour: u32,
    /// Hour at which the store goes offline.
    #[serde(default = "default_closing_hour")]
    pub closing_hour: u32,
}

impl StoreHoursConfig {
    /// Domain view of this window.
    #[must_use]
    pub const fn to_store_hours(&self) -> StoreHours {
        StoreHours::new(self.opening_hour, self.closing_hour)
    }
}

impl Default for StoreHoursConfig {
    fn default() -> Self {
        Self {
            opening_hour: default_opening_hour(),
            closing_hour: default_closing_hour(),
        }
    }
}

pub(crate) const fn default_opening_hour() -> u32 {
    8
}

pub(crate) const fn default_closing_hour() -> u32 {
    20
}
