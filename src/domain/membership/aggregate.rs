//! Membership aggregate entity.
//!
//! A membership instantiates a plan for one client: the active window is
//! derived from the plan's period at creation, the visit allowance from its
//! visit cap. All date-derived predicates take `today` explicitly so they
//! are pure and deterministic under test.
//!
//! # Design Decisions
//!
//! - **Plan snapshot**: end date and visit allowance are computed once at
//!   creation; later plan edits do not rewrite sold memberships
//! - **No rollback**: a failed precondition returns an error with zero
//!   mutation; successful transitions are persisted immediately by callers
//! - **Predicates never fail**: missing data degrades to `false`/`None`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, MembershipId, PlanId, StateMachine, Timestamp};
use crate::domain::plan::Plan;

use super::{MembershipError, MembershipStatus};

/// How close to the end date a membership counts as "about to expire".
pub const EXPIRY_WARNING_DAYS: u32 = 7;

/// Membership aggregate - one client-plan subscription instance.
///
/// # Invariants
///
/// - `end_date`, once set, equals `start_date` + the plan-derived duration
/// - `remaining_visits`, once initialized, only decreases; `None` means
///   unlimited, permanently
/// - `status == Frozen` implies `frozen_until` is set
/// - `status == Expired` is terminal for visit consumption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Unique identifier for this membership.
    pub id: MembershipId,

    /// Client who owns this membership.
    pub client_id: ClientId,

    /// Plan this membership was sold under. Immutable after creation.
    pub plan_id: PlanId,

    /// First day of the active window.
    pub start_date: NaiveDate,

    /// Last day of the active window, derived from the plan.
    pub end_date: Option<NaiveDate>,

    /// Visits left on a capped plan. `None` means unlimited.
    pub remaining_visits: Option<u32>,

    /// Current lifecycle status.
    pub status: MembershipStatus,

    /// Planned thaw date; only meaningful while status is Frozen.
    pub frozen_until: Option<NaiveDate>,

    /// Whether the membership renews automatically at period end.
    pub auto_renewal: bool,

    /// Free-form staff notes.
    pub notes: Option<String>,

    /// When the membership was created.
    pub created_at: Timestamp,

    /// When the membership was last updated.
    pub updated_at: Timestamp,
}

impl Membership {
    /// Creates a new active membership from a plan.
    ///
    /// The end date is `start_date` plus the plan-resolved duration, and the
    /// visit allowance is the plan's cap (`None` stays `None` for unlimited
    /// plans).
    pub fn create(
        id: MembershipId,
        client_id: ClientId,
        plan: &Plan,
        start_date: NaiveDate,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            client_id,
            plan_id: plan.id,
            start_date,
            end_date: Some(start_date + plan.duration()),
            remaining_visits: plan.visit_limit,
            status: MembershipStatus::Active,
            frozen_until: None,
            auto_renewal: false,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// True when the membership has run out, by status or by date.
    ///
    /// Derived predicate; never mutates status.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        if self.status == MembershipStatus::Expired {
            return true;
        }
        matches!(self.end_date, Some(end) if end < today)
    }

    /// Days left until the end date.
    ///
    /// `None` when no end date is set; zero once today is past it.
    pub fn days_remaining(&self, today: NaiveDate) -> Option<u32> {
        let end = self.end_date?;
        if today > end {
            return Some(0);
        }
        Some((end - today).num_days() as u32)
    }

    /// Whether the client may enter on this membership right now.
    pub fn can_enter(&self, today: NaiveDate) -> bool {
        if self.status != MembershipStatus::Active {
            return false;
        }
        if self.is_expired(today) {
            return false;
        }
        if matches!(self.remaining_visits, Some(0)) {
            return false;
        }
        true
    }

    /// True when 0 < days_remaining <= [`EXPIRY_WARNING_DAYS`].
    pub fn is_about_to_expire(&self, today: NaiveDate) -> bool {
        match self.days_remaining(today) {
            Some(days) => days > 0 && days <= EXPIRY_WARNING_DAYS,
            None => false,
        }
    }

    /// Consumes one visit from a capped allowance.
    ///
    /// Returns false with zero mutation when the allowance is unlimited or
    /// already exhausted. Reaching zero transitions the membership to
    /// Expired as a side effect.
    pub fn use_visit(&mut self, now: Timestamp) -> bool {
        match self.remaining_visits {
            Some(left) if left > 0 => {
                self.remaining_visits = Some(left - 1);
                if self.remaining_visits == Some(0) {
                    // Exhaustion forces expiry from whatever state we are in.
                    self.status = MembershipStatus::Expired;
                }
                self.updated_at = now;
                true
            }
            _ => false,
        }
    }

    /// Freezes the membership until the given date.
    ///
    /// # Errors
    ///
    /// Fails without mutation when the plan forbids freezing or the current
    /// status does not allow the transition.
    pub fn freeze(
        &mut self,
        plan: &Plan,
        until: NaiveDate,
        now: Timestamp,
    ) -> Result<(), MembershipError> {
        if !plan.can_freeze {
            return Err(MembershipError::FreezeNotSupported);
        }
        self.transition_to(MembershipStatus::Frozen)?;
        self.frozen_until = Some(until);
        self.updated_at = now;
        Ok(())
    }

    /// Thaws a frozen membership back to Active.
    ///
    /// # Errors
    ///
    /// Fails without mutation when the membership is not frozen.
    pub fn unfreeze(&mut self, now: Timestamp) -> Result<(), MembershipError> {
        if self.status != MembershipStatus::Frozen {
            return Err(MembershipError::NotFrozen);
        }
        self.transition_to(MembershipStatus::Active)?;
        self.frozen_until = None;
        self.updated_at = now;
        Ok(())
    }

    /// Cancels the membership.
    ///
    /// # Errors
    ///
    /// Fails when the current status does not allow cancellation.
    pub fn cancel(&mut self, now: Timestamp) -> Result<(), MembershipError> {
        self.transition_to(MembershipStatus::Cancelled)?;
        self.updated_at = now;
        Ok(())
    }

    fn transition_to(&mut self, target: MembershipStatus) -> Result<(), MembershipError> {
        self.status = self.status.transition_to(target).map_err(|_| {
            MembershipError::invalid_transition(self.status.as_str(), target.as_str())
        })?;
        Ok(())
    }
}
