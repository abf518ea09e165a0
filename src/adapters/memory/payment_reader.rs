//! In-memory implementation of PaymentReader.

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::memory::MemoryPaymentRepository;
use crate::domain::foundation::DomainError;
use crate::ports::{PaymentReader, PaymentStatistics};

/// In-memory implementation of the PaymentReader port.
pub struct MemoryPaymentReader {
    payments: Arc<MemoryPaymentRepository>,
}

impl MemoryPaymentReader {
    pub fn new(payments: Arc<MemoryPaymentRepository>) -> Self {
        Self { payments }
    }
}

#[async_trait]
impl PaymentReader for MemoryPaymentReader {
    async fn statistics(&self) -> Result<PaymentStatistics, DomainError> {
        let payments = self.payments.all()?;

        let mut stats = PaymentStatistics {
            total_count: payments.len() as u64,
            ..PaymentStatistics::default()
        };
        for p in &payments {
            if p.is_completed() {
                stats.completed_count += 1;
                stats.completed_total = stats.completed_total + p.amount;
            }
        }
        Ok(stats)
    }
}
