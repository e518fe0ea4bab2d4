//! Submit Order Use Case

use std::sync::Arc;

use crate::application::ports::{PaymentError, PaymentPort};
use crate::domain::ordering::{Order, PaymentInstrument, SubmitResult};

/// Use case for paying for an order.
pub struct SubmitOrderUseCase<P>
where
    P: PaymentPort,
{
    payments: Arc<P>,
}

impl<P> SubmitOrderUseCase<P>
where
    P: PaymentPort,
{
    /// Create a new SubmitOrderUseCase.
    pub const fn new(payments: Arc<P>) -> Self {
        Self { payments }
    }

    /// Charge the order total to `instrument`, exactly once.
    ///
    /// A charge that does not succeed becomes `SubmitResult::payment_failed()`.
    /// Errors raised by the processor itself are returned as-is.
    pub async fn execute(
        &self,
        order: &Order,
        instrument: &PaymentInstrument,
    ) -> Result<SubmitResult, PaymentError> {
        tracing::debug!(amount = %order.total_amount(), %instrument, "Charging order");

        let charge = self.payments.charge(instrument, order.total_amount()).await?;

        if charge.status.is_success() {
            tracing::info!(amount = %order.total_amount(), "Order paid");
            Ok(SubmitResult::succeeded())
        } else {
            tracing::warn!(
                amount = %order.total_amount(),
                %instrument,
                status = ?charge.status,
                "Payment not successful"
            );
            Ok(SubmitResult::payment_failed())
        }
    }
}
