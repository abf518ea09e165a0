//! FreezeMembershipHandler - Command handler for pausing memberships.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::MembershipId;
use crate::domain::membership::{Membership, MembershipError};
use crate::ports::{Clock, MembershipRepository, PlanRepository};

/// Command to freeze a membership until a given date.
#[derive(Debug, Clone)]
pub struct FreezeMembershipCommand {
    pub membership_id: MembershipId,
    pub until: NaiveDate,
}

/// Handler for freezing memberships.
///
/// Only plans sold with the freeze option allow it, and only an active
/// membership can be frozen.
pub struct FreezeMembershipHandler {
    memberships: Arc<dyn MembershipRepository>,
    plans: Arc<dyn PlanRepository>,
    clock: Arc<dyn Clock>,
}

impl FreezeMembershipHandler {
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
        cmd: FreezeMembershipCommand,
    ) -> Result<Membership, MembershipError> {
        let mut membership = self
            .memberships
            .find_by_id(&cmd.membership_id)
            .await?
            .ok_or(MembershipError::NotFound(cmd.membership_id))?;

        let plan = self
            .plans
            .find_by_id(&membership.plan_id)
            .await?
            .ok_or(MembershipError::PlanNotFound(membership.plan_id))?;

        membership.freeze(&plan, cmd.until, self.clock.now())?;
        self.memberships.update(&membership).await?;

        info!(
            membership_id = %membership.id,
            until = %cmd.until,
            "membership frozen"
        );
        Ok(membership)
    }
}
