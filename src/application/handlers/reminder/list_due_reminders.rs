//! ListDueRemindersHandler - Query handler for the dispatch queue.

use std::sync::Arc;

use crate::domain::reminder::{Reminder, ReminderError};
use crate::ports::{Clock, ReminderRepository};

/// Query for reminders ready to go out.
#[derive(Debug, Clone)]
pub struct ListDueRemindersQuery;

/// Handler returning pending reminders whose send time has arrived,
/// earliest first. Actual delivery is the dispatcher's job; this only
/// builds its work queue.
pub struct ListDueRemindersHandler {
    reminders: Arc<dyn ReminderRepository>,
    clock: Arc<dyn Clock>,
}

impl ListDueRemindersHandler {
    pub fn new(reminders: Arc<dyn ReminderRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { reminders, clock }
    }

    pub async fn handle(&self, _query: ListDueRemindersQuery) -> Result<Vec<Reminder>, ReminderError> {
        Ok(self.reminders.find_due(self.clock.now()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryReminderRepository;
    use crate::adapters::FixedClock;
    use crate::domain::foundation::{
        ClientId, MembershipId, Money, PaymentId, PlanId, ReminderId, Timestamp,
    };
    use crate::domain::payment::{Payment, PaymentKind, PaymentMethod, PaymentStatus};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reminder(period_end: NaiveDate, today: NaiveDate) -> Reminder {
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
        payment.period_end = Some(period_end);

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
    async fn lists_only_reminders_due_now() {
        let repo = Arc::new(MemoryReminderRepository::new());
        let today = date(2024, 6, 1);

        // Send dates 2024-06-03 and 2024-06-23.
        let due = reminder(date(2024, 6, 10), today);
        let not_yet = reminder(date(2024, 6, 30), today);
        repo.save(&due).await.unwrap();
        repo.save(&not_yet).await.unwrap();

        let handler = ListDueRemindersHandler::new(
            repo,
            Arc::new(FixedClock::on_date(date(2024, 6, 5))),
        );
        let found = handler.handle(ListDueRemindersQuery).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, due.id);
    }
}
