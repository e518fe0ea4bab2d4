//! Sandbox payment processor.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::application::ports::{PaymentError, PaymentPort};
use crate::domain::ordering::{ChargeResult, PaymentInstrument};
use crate::domain::shared::Money;

/// Payment processor that never moves money.
///
/// Approves any charge up to `approval_limit` on a non-blank instrument and
/// declines everything else.
#[derive(Debug, Clone)]
pub struct SandboxPaymentProcessor {
    approval_limit: Decimal,
}

impl SandboxPaymentProcessor {
    /// Create a processor with the given approval limit.
    #[must_use]
    pub const fn new(approval_limit: Decimal) -> Self {
        Self { approval_limit }
    }
}

#[async_trait]
impl PaymentPort for SandboxPaymentProcessor {
    async fn charge(
        &self,
        instrument: &PaymentInstrument,
        amount: Money,
    ) -> Result<ChargeResult, PaymentError> {
        if amount.is_negative() {
            return Err(PaymentError::ProcessorError {
                message: format!("negative charge amount {amount}"),
            });
        }

        let approved =
            !instrument.token().trim().is_empty() && amount.amount() <= self.approval_limit;
        tracing::debug!(%instrument, %amount, approved, "Sandbox charge");

        Ok(if approved {
            ChargeResult::success()
        } else {
            ChargeResult::failed()
        })
    }
}
