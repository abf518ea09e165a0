//! In-memory implementation of MembershipRepository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, MembershipId, PlanId};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::MembershipRepository;

/// In-memory implementation of the MembershipRepository port.
#[derive(Default)]
pub struct MemoryMembershipRepository {
    memberships: RwLock<HashMap<MembershipId, Membership>>,
}

impl MemoryMembershipRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<MembershipId, Membership>>, DomainError> {
        self.memberships
            .read()
            .map_err(|_| DomainError::storage("membership store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<MembershipId, Membership>>, DomainError> {
        self.memberships
            .write()
            .map_err(|_| DomainError::storage("membership store lock poisoned"))
    }

    /// Every stored membership. Backs the reporting reader.
    pub(crate) fn all(&self) -> Result<Vec<Membership>, DomainError> {
        Ok(self.read()?.values().cloned().collect())
    }
}

#[async_trait]
impl MembershipRepository for MemoryMembershipRepository {
    async fn save(&self, membership: &Membership) -> Result<(), DomainError> {
        self.write()?.insert(membership.id, membership.clone());
        Ok(())
    }

    async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
        let mut memberships = self.write()?;
        match memberships.get_mut(&membership.id) {
            Some(slot) => {
                *slot = membership.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                format!("Membership {} not found", membership.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_client(&self, client_id: &ClientId) -> Result<Vec<Membership>, DomainError> {
        let mut result: Vec<Membership> = self
            .read()?
            .values()
            .filter(|m| &m.client_id == client_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(result)
    }

    async fn find_expiring_within_days(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<Membership>, DomainError> {
        let cutoff = today + Duration::days(i64::from(days));
        let mut result: Vec<Membership> = self
            .read()?
            .values()
            .filter(|m| {
                m.status == MembershipStatus::Active
                    && m.end_date
                        .is_some_and(|end| end >= today && end <= cutoff)
            })
            .cloned()
            .collect();
        result.sort_by_key(|m| m.end_date);
        Ok(result)
    }

    async fn count_active_by_plan(&self, plan_id: &PlanId) -> Result<u64, DomainError> {
        let count = self
            .read()?
            .values()
            .filter(|m| &m.plan_id == plan_id && m.status == MembershipStatus::Active)
            .count();
        Ok(count as u64)
    }

    async fn delete(&self, id: &MembershipId) -> Result<(), DomainError> {
        let mut memberships = self.write()?;
        if memberships.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                format!("Membership {} not found", id),
            ));
        }
        Ok(())
    }
}
