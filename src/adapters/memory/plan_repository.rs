//! In-memory implementation of PlanRepository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

/// In-memory implementation of the PlanRepository port.
///
/// Enforces the unique plan name constraint on both save and update.
#[derive(Default)]
pub struct MemoryPlanRepository {
    plans: RwLock<HashMap<PlanId, Plan>>,
}

impl MemoryPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<PlanId, Plan>>, DomainError> {
        self.plans
            .read()
            .map_err(|_| DomainError::storage("plan store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<PlanId, Plan>>, DomainError> {
        self.plans
            .write()
            .map_err(|_| DomainError::storage("plan store lock poisoned"))
    }

    /// Every stored plan, active or not. Backs the reporting reader.
    pub(crate) fn all(&self) -> Result<Vec<Plan>, DomainError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn name_taken(plans: &HashMap<PlanId, Plan>, candidate: &Plan) -> bool {
        plans
            .values()
            .any(|p| p.id != candidate.id && p.name == candidate.name)
    }
}

#[async_trait]
impl PlanRepository for MemoryPlanRepository {
    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut plans = self.write()?;
        if Self::name_taken(&plans, plan) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Plan name '{}' is already taken", plan.name),
            ));
        }
        plans.insert(plan.id, plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut plans = self.write()?;
        if Self::name_taken(&plans, plan) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Plan name '{}' is already taken", plan.name),
            ));
        }
        match plans.get_mut(&plan.id) {
            Some(slot) => {
                *slot = plan.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Plan {} not found", plan.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Plan>, DomainError> {
        let mut active: Vec<Plan> = self
            .read()?
            .values()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(active)
    }

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError> {
        let mut plans = self.write()?;
        if plans.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Plan {} not found", id),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, Timestamp};
    use crate::domain::plan::PeriodUnit;

    fn plan(name: &str) -> Plan {
        Plan::create(
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
        .unwrap()
    }

    #[tokio::test]
    async fn saves_and_finds_plan() {
        let repo = MemoryPlanRepository::new();
        let plan = plan("Monthly");
        repo.save(&plan).await.unwrap();

        let found = repo.find_by_id(&plan.id).await.unwrap();
        assert_eq!(found, Some(plan));
    }

    #[tokio::test]
    async fn rejects_duplicate_name_on_save() {
        let repo = MemoryPlanRepository::new();
        repo.save(&plan("Monthly")).await.unwrap();

        let err = repo.save(&plan("Monthly")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn update_rejects_unknown_plan() {
        let repo = MemoryPlanRepository::new();
        let err = repo.update(&plan("Ghost")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotFound);
    }

    #[tokio::test]
    async fn list_active_orders_by_display_order_then_name() {
        let repo = MemoryPlanRepository::new();

        let mut annual = plan("Annual");
        annual.display_order = 2;
        let mut monthly = plan("Monthly");
        monthly.display_order = 1;
        let mut basic = plan("Basic");
        basic.display_order = 1;
        let mut retired = plan("Retired");
        retired.deactivate(Timestamp::now());

        for p in [&annual, &monthly, &basic, &retired] {
            repo.save(p).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_active()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Basic", "Monthly", "Annual"]);
    }

    #[tokio::test]
    async fn delete_removes_plan() {
        let repo = MemoryPlanRepository::new();
        let plan = plan("Monthly");
        repo.save(&plan).await.unwrap();

        repo.delete(&plan.id).await.unwrap();
        assert_eq!(repo.find_by_id(&plan.id).await.unwrap(), None);

        let err = repo.delete(&plan.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotFound);
    }
}
