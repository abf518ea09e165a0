//! CreatePlanHandler - Command handler for adding plans to the catalog.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Money, PlanId};
use crate::domain::plan::{PeriodUnit, Plan, PlanError};
use crate::ports::{Clock, PlanRepository};

/// Command to create a plan.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub period_value: i32,
    pub period_unit: PeriodUnit,
    /// `None` for unlimited visits.
    pub visit_limit: Option<u32>,
    pub can_freeze: bool,
    pub max_freeze_days: u32,
    pub display_order: i32,
}

/// Handler for creating plans.
pub struct CreatePlanHandler {
    repository: Arc<dyn PlanRepository>,
    clock: Arc<dyn Clock>,
}

impl CreatePlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<Plan, PlanError> {
        let mut plan = Plan::create(
            PlanId::new(),
            cmd.name,
            cmd.price,
            cmd.period_value,
            cmd.period_unit,
            cmd.visit_limit,
            cmd.can_freeze,
            cmd.max_freeze_days,
            self.clock.now(),
        )?;
        plan.description = cmd.description;
        plan.display_order = cmd.display_order;

        self.repository.save(&plan).await?;

        info!(plan_id = %plan.id, name = %plan.name, "plan created");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPlanRepository;
    use crate::adapters::FixedClock;
    use crate::domain::foundation::ErrorCode;
    use chrono::NaiveDate;

    fn handler(repo: Arc<MemoryPlanRepository>) -> CreatePlanHandler {
        let clock = Arc::new(FixedClock::on_date(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        ));
        CreatePlanHandler::new(repo, clock)
    }

    fn command(name: &str) -> CreatePlanCommand {
        CreatePlanCommand {
            name: name.to_string(),
            description: Some("Unlimited gym access".to_string()),
            price: Money::from_major(50),
            period_value: 1,
            period_unit: PeriodUnit::Months,
            visit_limit: None,
            can_freeze: true,
            max_freeze_days: 30,
            display_order: 1,
        }
    }

    #[tokio::test]
    async fn creates_and_persists_plan() {
        let repo = Arc::new(MemoryPlanRepository::new());
        let handler = handler(repo.clone());

        let plan = handler.handle(command("Monthly")).await.unwrap();
        assert_eq!(plan.name, "Monthly");
        assert!(plan.is_active);
        assert_eq!(plan.display_order, 1);

        let stored = repo.find_by_id(&plan.id).await.unwrap();
        assert_eq!(stored, Some(plan));
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let handler = handler(Arc::new(MemoryPlanRepository::new()));

        let err = handler.handle(command("  ")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmptyField);
    }

    #[tokio::test]
    async fn rejects_duplicate_name() {
        let repo = Arc::new(MemoryPlanRepository::new());
        let handler = handler(repo);

        handler.handle(command("Monthly")).await.unwrap();
        let err = handler.handle(command("Monthly")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn rejects_zero_visit_limit() {
        let handler = handler(Arc::new(MemoryPlanRepository::new()));

        let mut cmd = command("Punch card");
        cmd.visit_limit = Some(0);
        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::BelowMinimum);
    }
}
