//! Plan period units and duration resolution.
//!
//! The same day-count rule decides a membership's end date, a payment's
//! derived period, and per-day price comparisons. It is implemented once
//! here so the three call sites cannot drift apart.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Unit of a plan's validity period.
///
/// Month and year arithmetic is deliberately flat (30 and 365 days): reports
/// and historical records depend on the approximation, so it is specified
/// behavior rather than calendar-aware math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodUnit {
    Days,
    Months,
    Year,
}

impl PeriodUnit {
    /// Parses a stored unit string.
    ///
    /// Returns `None` for unrecognized values; callers feed that into
    /// [`resolve_duration`], which falls back to 30 days.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "days" => Some(PeriodUnit::Days),
            "months" => Some(PeriodUnit::Months),
            "year" => Some(PeriodUnit::Year),
            _ => None,
        }
    }

    /// Returns the stored string form of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodUnit::Days => "days",
            PeriodUnit::Months => "months",
            PeriodUnit::Year => "year",
        }
    }
}

/// Resolves a plan period to a concrete calendar span.
///
/// - `Days` -> `period_value` days
/// - `Months` -> `period_value` x 30 days
/// - `Year` -> `period_value` x 365 days
/// - unresolvable unit (`None`) -> 30 days
pub fn resolve_duration(period_value: i32, unit: Option<PeriodUnit>) -> Duration {
    let days = match unit {
        Some(PeriodUnit::Days) => i64::from(period_value),
        Some(PeriodUnit::Months) => i64::from(period_value) * 30,
        Some(PeriodUnit::Year) => i64::from(period_value) * 365,
        None => 30,
    };
    Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn days_resolve_to_value_days() {
        assert_eq!(resolve_duration(30, Some(PeriodUnit::Days)).num_days(), 30);
        assert_eq!(resolve_duration(1, Some(PeriodUnit::Days)).num_days(), 1);
    }

    #[test]
    fn months_resolve_to_thirty_day_blocks() {
        assert_eq!(resolve_duration(1, Some(PeriodUnit::Months)).num_days(), 30);
        assert_eq!(resolve_duration(12, Some(PeriodUnit::Months)).num_days(), 360);
    }

    #[test]
    fn years_resolve_to_365_day_blocks() {
        assert_eq!(resolve_duration(1, Some(PeriodUnit::Year)).num_days(), 365);
        assert_eq!(resolve_duration(2, Some(PeriodUnit::Year)).num_days(), 730);
    }

    #[test]
    fn unresolvable_unit_falls_back_to_thirty_days() {
        assert_eq!(resolve_duration(90, None).num_days(), 30);
        assert_eq!(resolve_duration(1, None).num_days(), 30);
    }

    #[test]
    fn parse_accepts_known_units() {
        assert_eq!(PeriodUnit::parse("days"), Some(PeriodUnit::Days));
        assert_eq!(PeriodUnit::parse("months"), Some(PeriodUnit::Months));
        assert_eq!(PeriodUnit::parse("year"), Some(PeriodUnit::Year));
    }

    #[test]
    fn parse_rejects_unknown_units() {
        assert_eq!(PeriodUnit::parse("weeks"), None);
        assert_eq!(PeriodUnit::parse(""), None);
        assert_eq!(PeriodUnit::parse("Days"), None);
    }

    #[test]
    fn as_str_roundtrips_through_parse() {
        for unit in [PeriodUnit::Days, PeriodUnit::Months, PeriodUnit::Year] {
            assert_eq!(PeriodUnit::parse(unit.as_str()), Some(unit));
        }
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic(value in 0i32..10_000, pick in 0u8..4) {
            let unit = match pick {
                0 => Some(PeriodUnit::Days),
                1 => Some(PeriodUnit::Months),
                2 => Some(PeriodUnit::Year),
                _ => None,
            };
            prop_assert_eq!(
                resolve_duration(value, unit),
                resolve_duration(value, unit)
            );
        }

        #[test]
        fn unknown_units_always_yield_thirty_days(value in i32::MIN..i32::MAX) {
            prop_assert_eq!(resolve_duration(value, None).num_days(), 30);
        }
    }
}
