//! Clock adapters.

use chrono::{Local, NaiveDateTime};

use crate::application::ports::ClockPort;

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Freeze the clock at `at`.
    #[must_use]
    pub const fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Either clock, chosen at startup.
#[derive(Debug, Clone, Copy)]
pub enum StoreClock {
    /// Live wall clock.
    System(SystemClock),
    /// Pinned instant.
    Fixed(FixedClock),
}

impl ClockPort for StoreClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            Self::System(clock) => clock.now(),
            Self::Fixed(clock) => clock.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_does_not_move() {
        let at = NaiveDate::from_ymd_opt(2024, 12, 25)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        let clock = StoreClock::Fixed(FixedClock::new(at));
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn system_clock_advances() {
        let clock = StoreClock::System(SystemClock);
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
