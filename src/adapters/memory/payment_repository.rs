//! In-memory implementation of PaymentRepository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, PaymentId};
use crate::domain::payment::Payment;
use crate::ports::PaymentRepository;

/// In-memory implementation of the PaymentRepository port.
#[derive(Default)]
pub struct MemoryPaymentRepository {
    payments: RwLock<HashMap<PaymentId, Payment>>,
}

impl MemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<PaymentId, Payment>>, DomainError> {
        self.payments
            .read()
            .map_err(|_| DomainError::storage("payment store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<PaymentId, Payment>>, DomainError> {
        self.payments
            .write()
            .map_err(|_| DomainError::storage("payment store lock poisoned"))
    }

    /// Every stored payment. Backs the reporting reader.
    pub(crate) fn all(&self) -> Result<Vec<Payment>, DomainError> {
        Ok(self.read()?.values().cloned().collect())
    }
}

#[async_trait]
impl PaymentRepository for MemoryPaymentRepository {
    async fn save(&self, payment: &Payment) -> Result<(), DomainError> {
        self.write()?.insert(payment.id, payment.clone());
        Ok(())
    }

    async fn update(&self, payment: &Payment) -> Result<(), DomainError> {
        let mut payments = self.write()?;
        match payments.get_mut(&payment.id) {
            Some(slot) => {
                *slot = payment.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PaymentNotFound,
                format!("Payment {} not found", payment.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_client(&self, client_id: &ClientId) -> Result<Vec<Payment>, DomainError> {
        let mut result: Vec<Payment> = self
            .read()?
            .values()
            .filter(|p| &p.client_id == client_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.paid_at.cmp(&a.paid_at));
        Ok(result)
    }
}
