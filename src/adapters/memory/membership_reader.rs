//! In-memory implementation of MembershipReader.
//!
//! Computes the dashboard aggregates by scanning the membership store and
//! joining plan names from the plan store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use crate::adapters::memory::{MemoryMembershipRepository, MemoryPlanRepository};
use crate::domain::foundation::DomainError;
use crate::domain::membership::MembershipStatus;
use crate::ports::{MembershipReader, MembershipStatistics, PlanActiveCount, StatisticsWindows};

/// In-memory implementation of the MembershipReader port.
pub struct MemoryMembershipReader {
    memberships: Arc<MemoryMembershipRepository>,
    plans: Arc<MemoryPlanRepository>,
}

impl MemoryMembershipReader {
    pub fn new(
        memberships: Arc<MemoryMembershipRepository>,
        plans: Arc<MemoryPlanRepository>,
    ) -> Self {
        Self { memberships, plans }
    }
}

#[async_trait]
impl MembershipReader for MemoryMembershipReader {
    async fn statistics(
        &self,
        today: NaiveDate,
        windows: StatisticsWindows,
    ) -> Result<MembershipStatistics, DomainError> {
        let memberships = self.memberships.all()?;
        let plans = self.plans.all()?;

        let soon_cutoff = today + Duration::days(i64::from(windows.expiring_soon_days));
        let new_cutoff = today - Duration::days(i64::from(windows.new_membership_days));

        let mut stats = MembershipStatistics {
            total_count: memberships.len() as u64,
            ..MembershipStatistics::default()
        };

        for m in &memberships {
            match m.status {
                MembershipStatus::Active => stats.active_count += 1,
                MembershipStatus::Expired => stats.expired_count += 1,
                MembershipStatus::Frozen => stats.frozen_count += 1,
                MembershipStatus::Cancelled => {}
            }

            if m.status == MembershipStatus::Active {
                if let Some(end) = m.end_date {
                    if end >= today && end <= soon_cutoff {
                        stats.expiring_soon += 1;
                    }
                    if end < today {
                        stats.past_end_date += 1;
                    }
                }
            }

            if m.start_date >= new_cutoff {
                stats.new_count += 1;
            }
        }

        let mut by_plan: Vec<PlanActiveCount> = plans
            .into_iter()
            .map(|plan| {
                let active_count = memberships
                    .iter()
                    .filter(|m| {
                        m.plan_id == plan.id && m.status == MembershipStatus::Active
                    })
                    .count() as u64;
                PlanActiveCount {
                    plan_id: plan.id,
                    plan_name: plan.name,
                    active_count,
                }
            })
            .collect();
        by_plan.sort_by(|a, b| {
            b.active_count
                .cmp(&a.active_count)
                .then_with(|| a.plan_name.cmp(&b.plan_name))
        });
        stats.by_plan = by_plan;

        Ok(stats)
    }
}
