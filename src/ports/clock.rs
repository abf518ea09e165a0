//! Clock port.
//!
//! Handlers take the current time from this port instead of reading the
//! system clock, so every date-derived rule is deterministic under test.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Timestamp;

    /// The current calendar date (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
