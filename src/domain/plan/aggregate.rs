//! Plan aggregate entity.
//!
//! A plan is a reusable subscription template: price, validity period,
//! optional visit cap, and freeze policy. Memberships snapshot their
//! duration and visit allowance from the plan at creation time, so editing
//! a plan never rewrites already-sold memberships.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PlanId, Timestamp, ValidationError};

use super::{resolve_duration, PeriodUnit};

/// Membership plan aggregate.
///
/// # Invariants
///
/// - `name` is non-empty (uniqueness is enforced by the store)
/// - `price` is non-negative
/// - `visit_limit`, when present, is greater than zero
/// - `period_value` is greater than zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for this plan.
    pub id: PlanId,

    /// Display name, unique across the catalog.
    pub name: String,

    /// Optional longer description shown to staff.
    pub description: Option<String>,

    /// Price for one period.
    pub price: Money,

    /// Length of the validity period, in `period_unit`s.
    pub period_value: i32,

    /// Unit of the validity period.
    pub period_unit: PeriodUnit,

    /// Visit cap per period. `None` means unlimited.
    pub visit_limit: Option<u32>,

    /// Whether memberships on this plan may be frozen.
    pub can_freeze: bool,

    /// Maximum freeze length in days. Zero means unbounded.
    pub max_freeze_days: u32,

    /// Whether the plan is offered for new memberships.
    pub is_active: bool,

    /// Sort key for listings; lower comes first.
    pub display_order: i32,

    /// When the plan was created.
    pub created_at: Timestamp,

    /// When the plan was last updated.
    pub updated_at: Timestamp,
}

impl Plan {
    /// Creates a new active plan after validating its fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the name is empty, the price is
    /// negative, the period value is not positive, or a visit limit of
    /// zero is given.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: PlanId,
        name: impl Into<String>,
        price: Money,
        period_value: i32,
        period_unit: PeriodUnit,
        visit_limit: Option<u32>,
        can_freeze: bool,
        max_freeze_days: u32,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if price.is_negative() {
            return Err(ValidationError::below_minimum("price", 0, price.as_cents()));
        }
        if period_value <= 0 {
            return Err(ValidationError::below_minimum(
                "period_value",
                1,
                i64::from(period_value),
            ));
        }
        if visit_limit == Some(0) {
            return Err(ValidationError::below_minimum("visit_limit", 1, 0));
        }

        Ok(Self {
            id,
            name,
            description: None,
            price,
            period_value,
            period_unit,
            visit_limit,
            can_freeze,
            max_freeze_days,
            is_active: true,
            display_order: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Resolves this plan's validity period to a concrete span.
    pub fn duration(&self) -> Duration {
        resolve_duration(self.period_value, Some(self.period_unit))
    }

    /// True when the plan has no visit cap.
    pub fn is_unlimited(&self) -> bool {
        self.visit_limit.is_none()
    }

    /// Price spread over the plan's period, for comparing plans.
    pub fn price_per_day(&self) -> Money {
        self.price.per_day(self.duration().num_days())
    }

    /// Withdraws the plan from sale without touching existing memberships.
    pub fn deactivate(&mut self, now: Timestamp) {
        self.is_active = false;
        self.updated_at = now;
    }
}
