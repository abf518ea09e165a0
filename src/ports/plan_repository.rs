//! Plan repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::Plan;

/// Repository port for Plan persistence.
///
/// Implementations must enforce the unique plan name constraint.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Save a new plan.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a plan with the same name exists
    /// - `StorageError` on persistence failure
    async fn save(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Update an existing plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Find a plan by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;

    /// List plans offered for sale, ordered by display order then name.
    async fn list_active(&self) -> Result<Vec<Plan>, DomainError>;

    /// Delete a plan.
    ///
    /// Callers are responsible for the in-use guard; this is the raw
    /// removal.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan doesn't exist
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: &PlanId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PlanRepository) {}
    }
}
