//! ListActivePlansHandler - Query handler for the sales catalog.

use std::sync::Arc;

use crate::domain::plan::{Plan, PlanError};
use crate::ports::PlanRepository;

/// Query for plans currently offered for sale.
#[derive(Debug, Clone)]
pub struct ListActivePlansQuery;

/// Handler returning active plans in display order.
pub struct ListActivePlansHandler {
    repository: Arc<dyn PlanRepository>,
}

impl ListActivePlansHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListActivePlansQuery) -> Result<Vec<Plan>, PlanError> {
        Ok(self.repository.list_active().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryPlanRepository;
    use crate::domain::foundation::{Money, PlanId, Timestamp};
    use crate::domain::plan::PeriodUnit;

    fn plan(name: &str, display_order: i32) -> Plan {
        let mut plan = Plan::create(
            PlanId::new(),
            name,
            Money::from_major(50),
            1,
            PeriodUnit::Months,
            None,
            false,
            0,
            Timestamp::now(),
        )
        .unwrap();
        plan.display_order = display_order;
        plan
    }

    #[tokio::test]
    async fn lists_only_active_plans_in_display_order() {
        let repo = Arc::new(MemoryPlanRepository::new());
        repo.save(&plan("Annual", 2)).await.unwrap();
        repo.save(&plan("Monthly", 1)).await.unwrap();
        let mut retired = plan("Retired", 0);
        retired.deactivate(Timestamp::now());
        repo.save(&retired).await.unwrap();

        let handler = ListActivePlansHandler::new(repo);
        let names: Vec<String> = handler
            .handle(ListActivePlansQuery)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, ["Monthly", "Annual"]);
    }
}
