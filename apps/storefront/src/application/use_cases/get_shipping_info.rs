//! Get Shipping Info Use Case

use std::sync::Arc;

use crate::application::ports::{ShippingError, ShippingPort};
use crate::domain::shipping::describe_quote;
use crate::error::ErrorCode;

/// Use case for describing shipping to a destination.
pub struct GetShippingInfoUseCase<S>
where
    S: ShippingPort,
{
    shipping: Arc<S>,
}

impl<S> GetShippingInfoUseCase<S>
where
    S: ShippingPort,
{
    /// Create a new GetShippingInfoUseCase.
    pub const fn new(shipping: Arc<S>) -> Self {
        Self { shipping }
    }

    /// Human-readable shipping cost and delivery estimate for `destination`.
    pub fn execute(&self, destination: &str) -> Result<String, ShippingError> {
        let quote = self.shipping.get_shipping_quote(destination)?;

        if quote.is_none() {
            tracing::info!(
                destination,
                code = %ErrorCode::ShippingUnavailable,
                "No shipping quote for destination"
            );
        }

        Ok(describe_quote(quote.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockShippingPort;
    use crate::domain::shared::Money;
    use crate::domain::shipping::ShippingQuote;
    use mockall::predicate::eq;

    #[test]
    fn unavailable_when_no_quote() {
        let mut shipping = MockShippingPort::new();
        shipping
            .expect_get_shipping_quote()
            .returning(|_| Ok(None));
        let use_case = GetShippingInfoUseCase::new(Arc::new(shipping));

        let info = use_case.execute("Atlantis").unwrap();

        assert!(info.to_lowercase().contains("unavailable"));
    }

    #[test]
    fn describes_cost_and_days() {
        let mut shipping = MockShippingPort::new();
        shipping
            .expect_get_shipping_quote()
            .with(eq("Warsaw"))
            .times(1)
            .returning(|_| Ok(Some(ShippingQuote::new(Money::from_units(10), 2))));
        let use_case = GetShippingInfoUseCase::new(Arc::new(shipping));

        let info = use_case.execute("Warsaw").unwrap();

        assert!(info.contains("$10"));
        assert!(info.to_lowercase().contains("2 days"));
    }

    #[test]
    fn provider_failure_propagates() {
        let mut shipping = MockShippingPort::new();
        shipping.expect_get_shipping_quote().returning(|_| {
            Err(ShippingError::Unavailable {
                message: "timeout".to_string(),
            })
        });
        let use_case = GetShippingInfoUseCase::new(Arc::new(shipping));

        assert!(use_case.execute("Warsaw").is_err());
    }
}
