//! Application Ports (Driven)
//!
//! Ports define how the storefront uses external systems. Every collaborator
//! sits behind one of these traits so it can be swapped for a test double
//! without touching the call sites.

mod analytics_port;
mod clock_port;
mod email_port;
mod exchange_rate_port;
mod payment_port;
mod security_code_port;
mod shipping_port;

pub use analytics_port::AnalyticsPort;
pub use clock_port::ClockPort;
pub use email_port::{EmailError, EmailMessage, EmailPort};
pub use exchange_rate_port::{ExchangeRateError, ExchangeRatePort};
pub use payment_port::{PaymentError, PaymentPort};
pub use security_code_port::SecurityCodePort;
pub use shipping_port::{ShippingError, ShippingPort};

#[cfg(test)]
pub use analytics_port::MockAnalyticsPort;
#[cfg(test)]
pub use clock_port::MockClockPort;
#[cfg(test)]
pub use email_port::MockEmailPort;
#[cfg(test)]
pub use exchange_rate_port::MockExchangeRatePort;
#[cfg(test)]
pub use payment_port::MockPaymentPort;
#[cfg(test)]
pub use security_code_port::MockSecurityCodePort;
#[cfg(test)]
pub use shipping_port::MockShippingPort;
