//! Payment repository port (write side).

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, PaymentId};
use crate::domain::payment::Payment;

/// Repository port for Payment aggregate persistence.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Save a new payment.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, payment: &Payment) -> Result<(), DomainError>;

    /// Update an existing payment.
    ///
    /// # Errors
    ///
    /// - `PaymentNotFound` if the payment doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, payment: &Payment) -> Result<(), DomainError>;

    /// Find a payment by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError>;

    /// All payments from a client, newest first.
    async fn find_by_client(&self, client_id: &ClientId) -> Result<Vec<Payment>, DomainError>;
}
