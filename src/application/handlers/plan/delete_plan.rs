//! DeletePlanHandler - Command handler for removing plans from the catalog.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::PlanId;
use crate::domain::plan::PlanError;
use crate::ports::{MembershipRepository, PlanRepository};

/// Command to delete a plan.
#[derive(Debug, Clone)]
pub struct DeletePlanCommand {
    pub plan_id: PlanId,
}

/// Handler for deleting plans.
///
/// A plan with active memberships cannot be deleted; deactivate it instead
/// to pull it from sale while existing members ride out their term.
pub struct DeletePlanHandler {
    plans: Arc<dyn PlanRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl DeletePlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { plans, memberships }
    }

    pub async fn handle(&self, cmd: DeletePlanCommand) -> Result<(), PlanError> {
        let plan = self
            .plans
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(PlanError::NotFound(cmd.plan_id))?;

        let active = self.memberships.count_active_by_plan(&plan.id).await?;
        if active > 0 {
            return Err(PlanError::InUse(plan.id, active));
        }

        self.plans.delete(&plan.id).await?;

        info!(plan_id = %plan.id, name = %plan.name, "plan deleted");
        Ok(())
    }
}
