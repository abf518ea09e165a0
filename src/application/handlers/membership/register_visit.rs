//! RegisterVisitHandler - Command handler for the front-door check-in.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::MembershipId;
use crate::domain::membership::{Membership, MembershipError};
use crate::ports::{Clock, MembershipRepository};

/// Command to register a client visit against a membership.
#[derive(Debug, Clone)]
pub struct RegisterVisitCommand {
    pub membership_id: MembershipId,
}

/// Result of a successful check-in.
#[derive(Debug, Clone)]
pub struct RegisterVisitResult {
    pub membership: Membership,
    /// False for unlimited plans, where entry is granted but no visit is
    /// deducted.
    pub visit_recorded: bool,
}

/// Handler for registering visits.
///
/// Entry is gated on the membership being usable today; on limited plans
/// the allowance is then decremented, and spending the last visit expires
/// the membership on the spot.
pub struct RegisterVisitHandler {
    memberships: Arc<dyn MembershipRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterVisitHandler {
    pub fn new(memberships: Arc<dyn MembershipRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { memberships, clock }
    }

    pub async fn handle(
        &self,
        cmd: RegisterVisitCommand,
    ) -> Result<RegisterVisitResult, MembershipError> {
        let mut membership = self
            .memberships
            .find_by_id(&cmd.membership_id)
            .await?
            .ok_or(MembershipError::NotFound(cmd.membership_id))?;

        let today = self.clock.today();
        if !membership.can_enter(today) {
            return Err(MembershipError::entry_denied(entry_refusal_reason(
                &membership,
                today,
            )));
        }

        let visit_recorded = membership.use_visit(self.clock.now());
        if visit_recorded {
            self.memberships.update(&membership).await?;
        }

        info!(
            membership_id = %membership.id,
            visit_recorded,
            remaining = ?membership.remaining_visits,
            "visit registered"
        );
        Ok(RegisterVisitResult {
            membership,
            visit_recorded,
        })
    }
}

fn entry_refusal_reason(membership: &Membership, today: NaiveDate) -> String {
    if membership.is_expired(today) {
        "membership has expired".to_string()
    } else if membership.remaining_visits == Some(0) {
        "no visits remaining".to_string()
    } else {
        format!("membership is {}", membership.status.as_str())
    }
}
