//! Reminder aggregate entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, MembershipId, PaymentId, ReminderId, Timestamp};
use crate::domain::payment::Payment;

use super::{ReminderKind, SendMethod, SendStatus};

/// Days before a period ends that the expiry notice goes out.
pub const REMINDER_LEAD_DAYS: u32 = 7;

/// Reminder aggregate - one scheduled notification.
///
/// Created Pending; stamped Sent or Failed by the dispatcher. "Overdue" is
/// a derived predicate over the send date, not a stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier for this reminder.
    pub id: ReminderId,

    /// Client to notify.
    pub client_id: ClientId,

    /// Membership the reminder concerns, if any.
    pub membership_id: Option<MembershipId>,

    /// Payment that triggered the reminder, if any.
    pub payment_id: Option<PaymentId>,

    /// What the reminder is about.
    pub kind: ReminderKind,

    /// When the reminder should go out.
    pub send_date: Timestamp,

    /// Delivery channel.
    pub method: SendMethod,

    /// Delivery status.
    pub send_status: SendStatus,

    /// Message subject line.
    pub subject: Option<String>,

    /// Message body.
    pub message: String,

    /// When the last dispatch attempt happened (sent or failed).
    pub sent_at: Option<Timestamp>,

    /// Failure detail from the last attempt.
    pub error_message: Option<String>,

    /// When the reminder was created.
    pub created_at: Timestamp,

    /// When the reminder was last updated.
    pub updated_at: Timestamp,
}

impl Reminder {
    /// Schedules an expiry notice for a completed membership payment.
    ///
    /// The send date is `lead_days` before the payment's period end.
    /// Returns `None` when the payment has no period end or the computed
    /// date is not strictly in the future - expired periods get no notice.
    pub fn expiry_notice(
        id: ReminderId,
        payment: &Payment,
        membership_id: MembershipId,
        lead_days: u32,
        today: NaiveDate,
        now: Timestamp,
    ) -> Option<Self> {
        let period_end = payment.period_end?;
        let send_date = period_end - chrono::Duration::days(i64::from(lead_days));
        if send_date <= today {
            return None;
        }

        Some(Self {
            id,
            client_id: payment.client_id,
            membership_id: Some(membership_id),
            payment_id: Some(payment.id),
            kind: ReminderKind::SubscriptionExpiry,
            send_date: Timestamp::from_date(send_date),
            method: SendMethod::Email,
            send_status: SendStatus::Pending,
            subject: Some("Your membership is about to expire".to_string()),
            message: format!("Your membership expires on {}.", period_end),
            sent_at: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// True when the reminder is pending and its send time has passed.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        self.send_status.is_pending() && self.send_date.is_before(&now)
    }

    /// Gate an external dispatcher checks before attempting delivery.
    pub fn can_send(&self, now: Timestamp) -> bool {
        self.send_status.is_pending() && !self.send_date.is_after(&now)
    }

    /// Stamps the reminder as sent.
    ///
    /// Unconditional: a second call just re-stamps `sent_at`.
    pub fn mark_as_sent(&mut self, now: Timestamp) {
        self.send_status = SendStatus::Sent;
        self.sent_at = Some(now);
        self.updated_at = now;
    }

    /// Stamps the reminder as failed with the delivery error.
    pub fn mark_as_failed(&mut self, error: impl Into<String>, now: Timestamp) {
        self.send_status = SendStatus::Failed;
        self.error_message = Some(error.into());
        self.sent_at = Some(now);
        self.updated_at = now;
    }
}
