//! Store Status Service
//!
//! Answers "is the store online?" and "what discount applies today?" from the
//! injected clock.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::ports::ClockPort;
use crate::domain::promotions::HolidayPromotion;
use crate::domain::store_hours::StoreHours;

/// Clock-driven store status.
pub struct StoreStatusService<C>
where
    C: ClockPort,
{
    clock: Arc<C>,
    hours: StoreHours,
    promotion: HolidayPromotion,
}

impl<C> StoreStatusService<C>
where
    C: ClockPort,
{
    /// Create a service with the given hours and promotion.
    pub const fn new(clock: Arc<C>, hours: StoreHours, promotion: HolidayPromotion) -> Self {
        Self {
            clock,
            hours,
            promotion,
        }
    }

    /// Create a service with the default 08:00-20:00 window and Christmas promotion.
    pub fn with_defaults(clock: Arc<C>) -> Self {
        Self::new(clock, StoreHours::default(), HolidayPromotion::default())
    }

    /// Whether the store is online right now.
    pub fn is_online(&self) -> bool {
        let now = self.clock.now();
        let online = self.hours.is_open_at(now);
        tracing::debug!(%now, online, "Checked store hours");
        online
    }

    /// Discount that applies today, as a fraction.
    pub fn get_discount(&self) -> Decimal {
        self.promotion.discount_on(self.clock.now().date())
    }
}
