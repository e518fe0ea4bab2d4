//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components.

use std::sync::Arc;

use crate::application::ports::{
    AnalyticsPort, ClockPort, EmailPort, ExchangeRatePort, PaymentPort, SecurityCodePort,
    ShippingPort,
};
use crate::application::services::StoreStatusService;
use crate::application::use_cases::{
    GetPriceInCurrencyUseCase, GetShippingInfoUseCase, LoginUseCase, RenderPageUseCase,
    SignUpUseCase, SubmitOrderUseCase,
};
use crate::config::Config;
use crate::domain::promotions::HolidayPromotion;
use crate::domain::store_hours::StoreHours;
use crate::infrastructure::analytics::TracingAnalytics;
use crate::infrastructure::clock::StoreClock;
use crate::infrastructure::email::LoggingEmailSender;
use crate::infrastructure::payment::SandboxPaymentProcessor;
use crate::infrastructure::rates::ConfiguredExchangeRates;
use crate::infrastructure::security_code::RandomSecurityCodeGenerator;
use crate::infrastructure::shipping::ConfiguredShippingRates;

/// Container wired with the local adapters.
pub type StorefrontContainer = Container<
    ConfiguredExchangeRates,
    ConfiguredShippingRates,
    TracingAnalytics,
    SandboxPaymentProcessor,
    LoggingEmailSender,
    RandomSecurityCodeGenerator,
    StoreClock,
>;

/// Dependency injection container.
///
/// Holds one instance of every port and hands out use cases that share them.
pub struct Container<R, S, A, P, E, G, C>
where
    R: ExchangeRatePort + 'static,
    S: ShippingPort + 'static,
    A: AnalyticsPort + 'static,
    P: PaymentPort + 'static,
    E: EmailPort + 'static,
    G: SecurityCodePort + 'static,
    C: ClockPort + 'static,
{
    // Ports
    rates: Arc<R>,
    shipping: Arc<S>,
    analytics: Arc<A>,
    payments: Arc<P>,
    email: Arc<E>,
    codes: Arc<G>,
    clock: Arc<C>,

    // Rules
    hours: StoreHours,
    promotion: HolidayPromotion,
}

impl<R, S, A, P, E, G, C> Container<R, S, A, P, E, G, C>
where
    R: ExchangeRatePort + 'static,
    S: ShippingPort + 'static,
    A: AnalyticsPort + 'static,
    P: PaymentPort + 'static,
    E: EmailPort + 'static,
    G: SecurityCodePort + 'static,
    C: ClockPort + 'static,
{
    /// Create a new container with all dependencies.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        rates: Arc<R>,
        shipping: Arc<S>,
        analytics: Arc<A>,
        payments: Arc<P>,
        email: Arc<E>,
        codes: Arc<G>,
        clock: Arc<C>,
        hours: StoreHours,
        promotion: HolidayPromotion,
    ) -> Self {
        Self {
            rates,
            shipping,
            analytics,
            payments,
            email,
            codes,
            clock,
            hours,
            promotion,
        }
    }

    /// Get the exchange rate port.
    pub fn rates(&self) -> Arc<R> {
        Arc::clone(&self.rates)
    }

    /// Create a `GetPriceInCurrencyUseCase`.
    pub fn price_in_currency_use_case(&self) -> GetPriceInCurrencyUseCase<R> {
        GetPriceInCurrencyUseCase::new(Arc::clone(&self.rates))
    }

    /// Create a `GetShippingInfoUseCase`.
    pub fn shipping_info_use_case(&self) -> GetShippingInfoUseCase<S> {
        GetShippingInfoUseCase::new(Arc::clone(&self.shipping))
    }

    /// Create a `RenderPageUseCase`.
    pub fn render_page_use_case(&self) -> RenderPageUseCase<A> {
        RenderPageUseCase::new(Arc::clone(&self.analytics))
    }

    /// Create a `SubmitOrderUseCase`.
    pub fn submit_order_use_case(&self) -> SubmitOrderUseCase<P> {
        SubmitOrderUseCase::new(Arc::clone(&self.payments))
    }

    /// Create a `SignUpUseCase`.
    pub fn sign_up_use_case(&self) -> SignUpUseCase<E> {
        SignUpUseCase::new(Arc::clone(&self.email))
    }

    /// Create a `LoginUseCase`.
    pub fn login_use_case(&self) -> LoginUseCase<G, E> {
        LoginUseCase::new(Arc::clone(&self.codes), Arc::clone(&self.email))
    }

    /// Create a `StoreStatusService`.
    pub fn store_status_service(&self) -> StoreStatusService<C> {
        StoreStatusService::new(Arc::clone(&self.clock), self.hours, self.promotion)
    }
}

impl StorefrontContainer {
    /// Wire the local adapters from configuration.
    #[must_use]
    pub fn from_config(config: &Config, clock: StoreClock) -> Self {
        Self::new(
            Arc::new(ConfiguredExchangeRates::new(config.exchange_rates.clone())),
            Arc::new(ConfiguredShippingRates::new(
                config.shipping.destinations.clone(),
            )),
            Arc::new(TracingAnalytics),
            Arc::new(SandboxPaymentProcessor::new(config.payments.approval_limit)),
            Arc::new(LoggingEmailSender),
            Arc::new(RandomSecurityCodeGenerator),
            Arc::new(clock),
            config.store_hours.to_store_hours(),
            config.promotions.holiday.to_promotion(),
        )
    }
}
