//! RecordPaymentHandler - Command handler for taking payments.
//!
//! Recording a payment resolves the covered period (from the linked
//! membership when there is one, otherwise from today and the plan) and,
//! for completed payments tied to a membership, schedules the expiry
//! reminder in the same stroke.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::{
    ClientId, MembershipId, Money, PaymentId, PlanId, ReminderId, Timestamp,
};
use crate::domain::membership::Membership;
use crate::domain::payment::{Payment, PaymentError, PaymentKind, PaymentMethod, PaymentStatus};
use crate::domain::reminder::{Reminder, REMINDER_LEAD_DAYS};
use crate::ports::{
    Clock, MembershipRepository, PaymentRepository, PlanRepository, ReminderRepository,
};

/// Command to record a payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    pub client_id: ClientId,
    pub membership_id: Option<MembershipId>,
    pub plan_id: Option<PlanId>,
    pub amount: Money,
    pub kind: PaymentKind,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    /// Explicit period bounds win over anything derived.
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Result of recording a payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentResult {
    pub payment: Payment,
    /// Expiry reminder scheduled with the payment, when one applies.
    pub reminder: Option<Reminder>,
}

/// Handler for recording payments.
pub struct RecordPaymentHandler {
    payments: Arc<dyn PaymentRepository>,
    memberships: Arc<dyn MembershipRepository>,
    plans: Arc<dyn PlanRepository>,
    reminders: Arc<dyn ReminderRepository>,
    clock: Arc<dyn Clock>,
    reminder_lead_days: u32,
}

impl RecordPaymentHandler {
    pub fn new(
        payments: Arc<dyn PaymentRepository>,
        memberships: Arc<dyn MembershipRepository>,
        plans: Arc<dyn PlanRepository>,
        reminders: Arc<dyn ReminderRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            payments,
            memberships,
            plans,
            reminders,
            clock,
            reminder_lead_days: REMINDER_LEAD_DAYS,
        }
    }

    /// Overrides how many days before period end the expiry reminder goes
    /// out.
    pub fn with_reminder_lead_days(mut self, days: u32) -> Self {
        self.reminder_lead_days = days;
        self
    }

    pub async fn handle(
        &self,
        cmd: RecordPaymentCommand,
    ) -> Result<RecordPaymentResult, PaymentError> {
        let membership = match cmd.membership_id {
            Some(id) => Some(
                self.memberships
                    .find_by_id(&id)
                    .await?
                    .ok_or_else(|| {
                        PaymentError::validation("membership_id", format!("Membership {} not found", id))
                    })?,
            ),
            None => None,
        };
        let plan = match cmd.plan_id {
            Some(id) => Some(self.plans.find_by_id(&id).await?.ok_or_else(|| {
                PaymentError::validation("plan_id", format!("Plan {} not found", id))
            })?),
            None => None,
        };

        let now = self.clock.now();
        let today = self.clock.today();

        let mut payment = Payment::create(
            PaymentId::new(),
            cmd.client_id,
            cmd.membership_id,
            cmd.plan_id,
            cmd.amount,
            cmd.kind,
            cmd.method,
            cmd.status,
            now,
        )
        .map_err(|e| PaymentError::validation("amount", e.to_string()))?;
        payment.period_start = cmd.period_start;
        payment.period_end = cmd.period_end;
        payment.notes = cmd.notes;

        payment.resolve_period(membership.as_ref(), plan.as_ref(), today);
        self.payments.save(&payment).await?;

        let reminder = self
            .schedule_expiry_reminder(&payment, membership.as_ref(), today, now)
            .await?;

        info!(
            payment_id = %payment.id,
            client_id = %payment.client_id,
            amount = %payment.amount,
            reminder_scheduled = reminder.is_some(),
            "payment recorded"
        );
        Ok(RecordPaymentResult { payment, reminder })
    }

    /// Completed payments with a linked membership get an expiry notice;
    /// anything else, or a period already too close to its end, gets none.
    async fn schedule_expiry_reminder(
        &self,
        payment: &Payment,
        membership: Option<&Membership>,
        today: NaiveDate,
        now: Timestamp,
    ) -> Result<Option<Reminder>, PaymentError> {
        if !payment.is_completed() {
            return Ok(None);
        }
        let Some(membership) = membership else {
            return Ok(None);
        };

        let Some(reminder) = Reminder::expiry_notice(
            ReminderId::new(),
            payment,
            membership.id,
            self.reminder_lead_days,
            today,
            now,
        ) else {
            return Ok(None);
        };

        self.reminders.save(&reminder).await?;
        Ok(Some(reminder))
    }
}
