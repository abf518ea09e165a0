//! Payment aggregate entity and billing-period resolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClientId, MembershipId, Money, PaymentId, PlanId, StateMachine, Timestamp, ValidationError,
};
use crate::domain::membership::Membership;
use crate::domain::plan::Plan;

use super::{PaymentError, PaymentKind, PaymentMethod, PaymentStatus};

/// Payment aggregate - one monetary transaction.
///
/// # Invariants
///
/// - `amount` is non-negative
/// - When both period bounds are set, `period_end >= period_start` is
///   required for `period_days` to be meaningful (resolution guarantees it;
///   the store does not constrain it)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier for this payment.
    pub id: PaymentId,

    /// Client the money came from.
    pub client_id: ClientId,

    /// Membership this payment extends, if any.
    pub membership_id: Option<MembershipId>,

    /// Plan charged directly (walk-in purchase), if any.
    pub plan_id: Option<PlanId>,

    /// Amount received.
    pub amount: Money,

    /// When the payment happened.
    pub paid_at: Timestamp,

    /// What the payment was for.
    pub kind: PaymentKind,

    /// How the money arrived.
    pub method: PaymentMethod,

    /// Settlement status.
    pub status: PaymentStatus,

    /// First day the payment covers.
    pub period_start: Option<NaiveDate>,

    /// Last day the payment covers.
    pub period_end: Option<NaiveDate>,

    /// Free-form staff notes.
    pub notes: Option<String>,

    /// When the payment record was created.
    pub created_at: Timestamp,

    /// When the payment record was last updated.
    pub updated_at: Timestamp,
}

impl Payment {
    /// Creates a payment record after validating the amount.
    ///
    /// New payments default to Completed, matching front-desk flow where
    /// money changes hands before the record is made; pass
    /// [`PaymentStatus::Pending`] for invoiced charges.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: PaymentId,
        client_id: ClientId,
        membership_id: Option<MembershipId>,
        plan_id: Option<PlanId>,
        amount: Money,
        kind: PaymentKind,
        method: PaymentMethod,
        status: PaymentStatus,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        if amount.is_negative() {
            return Err(ValidationError::below_minimum("amount", 0, amount.as_cents()));
        }

        Ok(Self {
            id,
            client_id,
            membership_id,
            plan_id,
            amount,
            paid_at: now,
            kind,
            method,
            status,
            period_start: None,
            period_end: None,
            notes: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Fills in the covered period at finalization time.
    ///
    /// Resolution order:
    /// 1. linked membership and no explicit start: copy the membership's
    ///    window verbatim, no recomputation;
    /// 2. still no start: default to today;
    /// 3. no end and a directly linked plan: derive end from the plan via
    ///    the shared duration resolver.
    ///
    /// Already-set bounds are never overwritten.
    pub fn resolve_period(
        &mut self,
        membership: Option<&Membership>,
        plan: Option<&Plan>,
        today: NaiveDate,
    ) {
        if self.period_start.is_none() {
            if let Some(membership) = membership {
                self.period_start = Some(membership.start_date);
                self.period_end = membership.end_date;
            }
        }

        if self.period_start.is_none() {
            self.period_start = Some(today);
        }

        if self.period_end.is_none() {
            if let (Some(start), Some(plan)) = (self.period_start, plan) {
                self.period_end = Some(start + plan.duration());
            }
        }
    }

    /// Number of days in the covered period; zero when either bound is
    /// missing.
    pub fn period_days(&self) -> i64 {
        match (self.period_start, self.period_end) {
            (Some(start), Some(end)) => (end - start).num_days(),
            _ => 0,
        }
    }

    /// Amount spread over the covered period, rounded to cents.
    ///
    /// Returns the full amount unreduced when the period is empty, guarding
    /// division by zero.
    pub fn price_per_day(&self) -> Money {
        self.amount.per_day(self.period_days())
    }

    /// True once money has been received.
    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    /// Whether a refund is currently possible.
    pub fn can_refund(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    /// Marks a pending payment as settled.
    pub fn complete(&mut self, now: Timestamp) -> Result<(), PaymentError> {
        self.transition_to(PaymentStatus::Completed)?;
        self.paid_at = now;
        self.updated_at = now;
        Ok(())
    }

    /// Cancels a pending payment.
    pub fn cancel(&mut self, now: Timestamp) -> Result<(), PaymentError> {
        self.transition_to(PaymentStatus::Cancelled)?;
        self.updated_at = now;
        Ok(())
    }

    /// Refunds a completed payment.
    ///
    /// # Errors
    ///
    /// Fails without mutation unless the payment is Completed.
    pub fn refund(&mut self, now: Timestamp) -> Result<(), PaymentError> {
        if !self.can_refund() {
            return Err(PaymentError::refund_not_allowed(self.status.as_str()));
        }
        self.transition_to(PaymentStatus::Refunded)?;
        self.updated_at = now;
        Ok(())
    }

    fn transition_to(&mut self, target: PaymentStatus) -> Result<(), PaymentError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| PaymentError::invalid_transition(self.status.as_str(), target.as_str()))?;
        Ok(())
    }
}
