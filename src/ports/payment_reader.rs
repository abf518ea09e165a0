//! Payment reader port (read side).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Money};

/// Aggregate payment statistics for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatistics {
    /// All payments recorded.
    pub total_count: u64,

    /// Payments with status Completed.
    pub completed_count: u64,

    /// Sum over completed payments.
    pub completed_total: Money,
}

/// Read-only reporting port over payments.
#[async_trait]
pub trait PaymentReader: Send + Sync {
    /// Compute payment totals.
    async fn statistics(&self) -> Result<PaymentStatistics, DomainError>;
}
