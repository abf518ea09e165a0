//! MarkReminderFailedHandler - Command handler for recording failed sends.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::ReminderId;
use crate::domain::reminder::{Reminder, ReminderError};
use crate::ports::{Clock, ReminderRepository};

/// Command to mark a reminder's dispatch attempt as failed.
#[derive(Debug, Clone)]
pub struct MarkReminderFailedCommand {
    pub reminder_id: ReminderId,
    pub error: String,
}

/// Handler recording a failed dispatch with its error detail.
pub struct MarkReminderFailedHandler {
    reminders: Arc<dyn ReminderRepository>,
    clock: Arc<dyn Clock>,
}

impl MarkReminderFailedHandler {
    pub fn new(reminders: Arc<dyn ReminderRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { reminders, clock }
    }

    pub async fn handle(
        &self,
        cmd: MarkReminderFailedCommand,
    ) -> Result<Reminder, ReminderError> {
        let mut reminder = self
            .reminders
            .find_by_id(&cmd.reminder_id)
            .await?
            .ok_or(ReminderError::NotFound(cmd.reminder_id))?;

        reminder.mark_as_failed(cmd.error, self.clock.now());
        self.reminders.update(&reminder).await?;

        warn!(
            reminder_id = %reminder.id,
            error = ?reminder.error_message,
            "reminder dispatch failed"
        );
        Ok(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryReminderRepository;
    use crate::adapters::FixedClock;
    use crate::domain::foundation::{
        ClientId, MembershipId, Money, PaymentId, PlanId, Timestamp,
    };
    use crate::domain::payment::{Payment, PaymentKind, PaymentMethod, PaymentStatus};
    use crate::domain::reminder::SendStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pending_reminder(today: NaiveDate) -> Reminder {
        let mut payment = Payment::create(
            PaymentId::new(),
            ClientId::new(),
            Some(MembershipId::new()),
            Some(PlanId::new()),
            Money::from_major(50),
            PaymentKind::Subscription,
            PaymentMethod::Cash,
            PaymentStatus::Completed,
            Timestamp::from_date(today),
        )
        .unwrap();
        payment.period_start = Some(today);
        payment.period_end = Some(date(2024, 6, 30));

        Reminder::expiry_notice(
            ReminderId::new(),
            &payment,
            MembershipId::new(),
            7,
            today,
            Timestamp::from_date(today),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn records_failure_with_error_detail() {
        let repo = Arc::new(MemoryReminderRepository::new());
        let r = pending_reminder(date(2024, 6, 1));
        repo.save(&r).await.unwrap();

        let handler = MarkReminderFailedHandler::new(
            repo.clone(),
            Arc::new(FixedClock::on_date(date(2024, 6, 23))),
        );
        let failed = handler
            .handle(MarkReminderFailedCommand {
                reminder_id: r.id,
                error: "mailbox unavailable".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(failed.send_status, SendStatus::Failed);
        assert_eq!(failed.error_message.as_deref(), Some("mailbox unavailable"));
        assert!(failed.sent_at.is_some());

        let stored = repo.find_by_id(&r.id).await.unwrap().unwrap();
        assert_eq!(stored.send_status, SendStatus::Failed);
    }

    #[tokio::test]
    async fn fails_for_unknown_reminder() {
        let handler = MarkReminderFailedHandler::new(
            Arc::new(MemoryReminderRepository::new()),
            Arc::new(FixedClock::on_date(date(2024, 6, 23))),
        );

        let err = handler
            .handle(MarkReminderFailedCommand {
                reminder_id: ReminderId::new(),
                error: "mailbox unavailable".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReminderError::NotFound(_)));
    }
}
