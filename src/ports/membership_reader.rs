//! Membership reader port (read side).
//!
//! Read-only aggregates for dashboards and exports. Implementations may
//! serve these from the same store as the write side or from a replica.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, PlanId};

/// Day windows the statistics are computed over.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsWindows {
    /// Active memberships ending within this many days count as
    /// "expiring soon".
    pub expiring_soon_days: u32,

    /// Memberships started within this many days count as "new".
    pub new_membership_days: u32,
}

impl Default for StatisticsWindows {
    fn default() -> Self {
        Self {
            expiring_soon_days: 7,
            new_membership_days: 30,
        }
    }
}

/// Active membership count for one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanActiveCount {
    pub plan_id: PlanId,
    pub plan_name: String,
    pub active_count: u64,
}

/// Aggregate membership statistics for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipStatistics {
    /// All memberships ever recorded.
    pub total_count: u64,

    /// Memberships with status Active.
    pub active_count: u64,

    /// Memberships with status Expired.
    pub expired_count: u64,

    /// Memberships with status Frozen.
    pub frozen_count: u64,

    /// Active memberships ending within the expiring-soon window.
    pub expiring_soon: u64,

    /// Still marked Active but already past their end date.
    pub past_end_date: u64,

    /// Memberships started within the new-membership window.
    pub new_count: u64,

    /// Active counts per plan, most popular first.
    pub by_plan: Vec<PlanActiveCount>,
}

/// Read-only reporting port over memberships.
#[async_trait]
pub trait MembershipReader: Send + Sync {
    /// Compute dashboard statistics as of `today`.
    async fn statistics(
        &self,
        today: NaiveDate,
        windows: StatisticsWindows,
    ) -> Result<MembershipStatistics, DomainError>;
}
