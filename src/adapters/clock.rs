//! Clock adapters.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests and dry runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    /// Pins the clock to the given instant.
    pub fn at(instant: Timestamp) -> Self {
        Self(instant)
    }

    /// Pins the clock to midnight UTC on the given date.
    pub fn on_date(date: NaiveDate) -> Self {
        Self(Timestamp::from_date(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
