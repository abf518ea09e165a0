//! UnfreezeMembershipHandler - Command handler for resuming memberships.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::MembershipId;
use crate::domain::membership::{Membership, MembershipError};
use crate::ports::{Clock, MembershipRepository};

/// Command to unfreeze a membership.
#[derive(Debug, Clone)]
pub struct UnfreezeMembershipCommand {
    pub membership_id: MembershipId,
}

/// Handler for unfreezing memberships.
pub struct UnfreezeMembershipHandler {
    memberships: Arc<dyn MembershipRepository>,
    clock: Arc<dyn Clock>,
}

impl UnfreezeMembershipHandler {
    pub fn new(memberships: Arc<dyn MembershipRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { memberships, clock }
    }

    pub async fn handle(
        &self,
        cmd: UnfreezeMembershipCommand,
    ) -> Result<Membership, MembershipError> {
        let mut membership = self
            .memberships
            .find_by_id(&cmd.membership_id)
            .await?
            .ok_or(MembershipError::NotFound(cmd.membership_id))?;

        membership.unfreeze(self.clock.now())?;
        self.memberships.update(&membership).await?;

        info!(membership_id = %membership.id, "membership unfrozen");
        Ok(membership)
    }
}
