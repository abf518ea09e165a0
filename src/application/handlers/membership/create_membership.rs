//! CreateMembershipHandler - Command handler for selling memberships.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::{ClientId, MembershipId, PlanId};
use crate::domain::membership::{Membership, MembershipError};
use crate::ports::{Clock, MembershipRepository, PlanRepository};

/// Command to create a membership for a client.
#[derive(Debug, Clone)]
pub struct CreateMembershipCommand {
    pub client_id: ClientId,
    pub plan_id: PlanId,
    /// Defaults to today when omitted.
    pub start_date: Option<NaiveDate>,
}

/// Handler for creating memberships.
///
/// The plan drives everything derived: end date from the plan period, the
/// visit allowance from its cap. Inactive plans cannot be sold.
pub struct CreateMembershipHandler {
    memberships: Arc<dyn MembershipRepository>,
    plans: Arc<dyn PlanRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateMembershipHandler {
    pub fn new(
        memberships: Arc<dyn MembershipRepository>,
        plans: Arc<dyn PlanRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            memberships,
            plans,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateMembershipCommand,
    ) -> Result<Membership, MembershipError> {
        let plan = self
            .plans
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(MembershipError::PlanNotFound(cmd.plan_id))?;
        if !plan.is_active {
            return Err(MembershipError::PlanInactive(plan.id));
        }

        let start_date = cmd.start_date.unwrap_or_else(|| self.clock.today());
        let membership = Membership::create(
            MembershipId::new(),
            cmd.client_id,
            &plan,
            start_date,
            self.clock.now(),
        );

        self.memberships.save(&membership).await?;

        info!(
            membership_id = %membership.id,
            client_id = %membership.client_id,
            plan = %plan.name,
            "membership created"
        );
        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryMembershipRepository, MemoryPlanRepository};
    use crate::adapters::FixedClock;
    use crate::domain::foundation::{Money, PlanId, Timestamp};
    use crate::domain::membership::MembershipStatus;
    use crate::domain::plan::{PeriodUnit, Plan};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan(visit_limit: Option<u32>) -> Plan {
        Plan::create(
            PlanId::new(),
            "Monthly",
            Money::from_major(50),
            1,
            PeriodUnit::Months,
            visit_limit,
            false,
            0,
            Timestamp::now(),
        )
        .unwrap()
    }

    struct Fixture {
        memberships: Arc<MemoryMembershipRepository>,
        plans: Arc<MemoryPlanRepository>,
        handler: CreateMembershipHandler,
    }

    fn fixture(today: NaiveDate) -> Fixture {
        let memberships = Arc::new(MemoryMembershipRepository::new());
        let plans = Arc::new(MemoryPlanRepository::new());
        let handler = CreateMembershipHandler::new(
            memberships.clone(),
            plans.clone(),
            Arc::new(FixedClock::on_date(today)),
        );
        Fixture {
            memberships,
            plans,
            handler,
        }
    }

    #[tokio::test]
    async fn creates_membership_with_plan_derived_fields() {
        let f = fixture(date(2024, 6, 1));
        let plan = plan(Some(10));
        f.plans.save(&plan).await.unwrap();

        let membership = f
            .handler
            .handle(CreateMembershipCommand {
                client_id: ClientId::new(),
                plan_id: plan.id,
                start_date: None,
            })
            .await
            .unwrap();

        assert_eq!(membership.status, MembershipStatus::Active);
        assert_eq!(membership.start_date, date(2024, 6, 1));
        assert_eq!(membership.end_date, Some(date(2024, 7, 1)));
        assert_eq!(membership.remaining_visits, Some(10));
        assert!(f
            .memberships
            .find_by_id(&membership.id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn honors_explicit_start_date() {
        let f = fixture(date(2024, 6, 1));
        let plan = plan(None);
        f.plans.save(&plan).await.unwrap();

        let membership = f
            .handler
            .handle(CreateMembershipCommand {
                client_id: ClientId::new(),
                plan_id: plan.id,
                start_date: Some(date(2024, 7, 1)),
            })
            .await
            .unwrap();

        assert_eq!(membership.start_date, date(2024, 7, 1));
        assert_eq!(membership.end_date, Some(date(2024, 7, 31)));
        assert_eq!(membership.remaining_visits, None);
    }

    #[tokio::test]
    async fn fails_for_unknown_plan() {
        let f = fixture(date(2024, 6, 1));

        let err = f
            .handler
            .handle(CreateMembershipCommand {
                client_id: ClientId::new(),
                plan_id: PlanId::new(),
                start_date: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, MembershipError::PlanNotFound(_)));
    }

    #[tokio::test]
    async fn refuses_inactive_plan() {
        let f = fixture(date(2024, 6, 1));
        let mut plan = plan(None);
        plan.deactivate(Timestamp::now());
        f.plans.save(&plan).await.unwrap();

        let err = f
            .handler
            .handle(CreateMembershipCommand {
                client_id: ClientId::new(),
                plan_id: plan.id,
                start_date: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, MembershipError::PlanInactive(_)));
    }
}
