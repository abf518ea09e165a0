//! Membership status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Membership lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// Valid for entry while within the active window.
    Active,

    /// Window or visit allowance exhausted. Terminal.
    Expired,

    /// Temporarily suspended; `frozen_until` records the planned thaw date.
    Frozen,

    /// Terminated by staff. Can still age into Expired.
    Cancelled,
}

impl MembershipStatus {
    /// Returns the stored string form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Expired => "expired",
            MembershipStatus::Frozen => "frozen",
            MembershipStatus::Cancelled => "cancelled",
        }
    }
}

impl StateMachine for MembershipStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MembershipStatus::*;
        matches!(
            (self, target),
            // From ACTIVE
            (Active, Frozen)
                | (Active, Cancelled)
                | (Active, Expired)
            // From FROZEN
                | (Frozen, Active)
                | (Frozen, Expired)
                | (Frozen, Cancelled)
            // From CANCELLED
                | (Cancelled, Expired)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MembershipStatus::*;
        match self {
            Active => vec![Frozen, Cancelled, Expired],
            Frozen => vec![Active, Expired, Cancelled],
            Cancelled => vec![Expired],
            Expired => vec![],
        }
    }
}
