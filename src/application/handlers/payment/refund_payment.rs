//! RefundPaymentHandler - Command handler for refunding payments.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::PaymentId;
use crate::domain::payment::{Payment, PaymentError};
use crate::ports::{Clock, PaymentRepository};

/// Command to refund a payment.
#[derive(Debug, Clone)]
pub struct RefundPaymentCommand {
    pub payment_id: PaymentId,
}

/// Handler for refunding payments.
///
/// Only completed payments can be refunded; pending or cancelled ones have
/// nothing to give back.
pub struct RefundPaymentHandler {
    payments: Arc<dyn PaymentRepository>,
    clock: Arc<dyn Clock>,
}

impl RefundPaymentHandler {
    pub fn new(payments: Arc<dyn PaymentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { payments, clock }
    }

    pub async fn handle(&self, cmd: RefundPaymentCommand) -> Result<Payment, PaymentError> {
        let mut payment = self
            .payments
            .find_by_id(&cmd.payment_id)
            .await?
            .ok_or(PaymentError::NotFound(cmd.payment_id))?;

        payment.refund(self.clock.now())?;
        self.payments.update(&payment).await?;

        info!(payment_id = %payment.id, amount = %payment.amount, "payment refunded");
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPaymentRepository;
    use crate::adapters::FixedClock;
    use crate::domain::foundation::{ClientId, Money, Timestamp};
    use crate::domain::payment::{PaymentKind, PaymentMethod, PaymentStatus};
    use chrono::NaiveDate;

    fn payment(status: PaymentStatus) -> Payment {
        Payment::create(
            PaymentId::new(),
            ClientId::new(),
            None,
            None,
            Money::from_major(50),
            PaymentKind::Subscription,
            PaymentMethod::Card,
            status,
            Timestamp::now(),
        )
        .unwrap()
    }

    fn handler(repo: Arc<MemoryPaymentRepository>) -> RefundPaymentHandler {
        let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        RefundPaymentHandler::new(repo, Arc::new(clock))
    }

    #[tokio::test]
    async fn refunds_completed_payment() {
        let repo = Arc::new(MemoryPaymentRepository::new());
        let p = payment(PaymentStatus::Completed);
        repo.save(&p).await.unwrap();

        let refunded = handler(repo.clone())
            .handle(RefundPaymentCommand { payment_id: p.id })
            .await
            .unwrap();

        assert_eq!(refunded.status, PaymentStatus::Refunded);
        let stored = repo.find_by_id(&p.id).await.unwrap().unwrap();
        assert_eq!(stored.status, PaymentStatus::Refunded);
    }

    #[tokio::test]
    async fn refuses_pending_payment() {
        let repo = Arc::new(MemoryPaymentRepository::new());
        let p = payment(PaymentStatus::Pending);
        repo.save(&p).await.unwrap();

        let err = handler(repo.clone())
            .handle(RefundPaymentCommand { payment_id: p.id })
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::RefundNotAllowed { .. }));
        let stored = repo.find_by_id(&p.id).await.unwrap().unwrap();
        assert_eq!(stored.status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn refuses_double_refund() {
        let repo = Arc::new(MemoryPaymentRepository::new());
        let p = payment(PaymentStatus::Completed);
        repo.save(&p).await.unwrap();

        let handler = handler(repo);
        handler
            .handle(RefundPaymentCommand { payment_id: p.id })
            .await
            .unwrap();
        let err = handler
            .handle(RefundPaymentCommand { payment_id: p.id })
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::RefundNotAllowed { .. }));
    }

    #[tokio::test]
    async fn fails_for_unknown_payment() {
        let err = handler(Arc::new(MemoryPaymentRepository::new()))
            .handle(RefundPaymentCommand {
                payment_id: PaymentId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::NotFound(_)));
    }
}
