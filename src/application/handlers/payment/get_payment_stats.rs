//! GetPaymentStatsHandler - Query handler for payment totals.

use std::sync::Arc;

use crate::domain::payment::PaymentError;
use crate::ports::{PaymentReader, PaymentStatistics};

/// Query for payment statistics.
#[derive(Debug, Clone)]
pub struct GetPaymentStatsQuery;

/// Handler for retrieving payment totals.
pub struct GetPaymentStatsHandler {
    reader: Arc<dyn PaymentReader>,
}

impl GetPaymentStatsHandler {
    pub fn new(reader: Arc<dyn PaymentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetPaymentStatsQuery,
    ) -> Result<PaymentStatistics, PaymentError> {
        Ok(self.reader.statistics().await?)
    }
}
