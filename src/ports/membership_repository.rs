//! Membership repository port (write side).
//!
//! Every lifecycle transition persists immediately through this port; a
//! failed precondition never reaches it.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{ClientId, DomainError, MembershipId, PlanId};
use crate::domain::membership::Membership;

/// Repository port for Membership aggregate persistence.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Save a new membership.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Update an existing membership.
    ///
    /// # Errors
    ///
    /// - `MembershipNotFound` if the membership doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Find a membership by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError>;

    /// All memberships belonging to a client, newest start date first.
    async fn find_by_client(&self, client_id: &ClientId) -> Result<Vec<Membership>, DomainError>;

    /// Active memberships whose end date falls within `days` of `today`.
    ///
    /// Used for renewal outreach.
    async fn find_expiring_within_days(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<Membership>, DomainError>;

    /// Number of memberships on the given plan with status Active.
    ///
    /// Backs the plan deletion guard.
    async fn count_active_by_plan(&self, plan_id: &PlanId) -> Result<u64, DomainError>;

    /// Delete a membership.
    ///
    /// Unlike plans, memberships carry no in-use guard; deletion is an
    /// explicit administrative action.
    ///
    /// # Errors
    ///
    /// - `MembershipNotFound` if the membership doesn't exist
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: &MembershipId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MembershipRepository) {}
    }
}
