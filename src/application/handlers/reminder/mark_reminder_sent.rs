//! MarkReminderSentHandler - Command handler for recording deliveries.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::ReminderId;
use crate::domain::reminder::{Reminder, ReminderError};
use crate::ports::{Clock, ReminderRepository};

/// Command to mark a reminder as sent.
#[derive(Debug, Clone)]
pub struct MarkReminderSentCommand {
    pub reminder_id: ReminderId,
}

/// Handler recording a successful dispatch.
///
/// Re-marking an already-sent reminder just re-stamps it; dispatchers may
/// retry without checking first.
pub struct MarkReminderSentHandler {
    reminders: Arc<dyn ReminderRepository>,
    clock: Arc<dyn Clock>,
}

impl MarkReminderSentHandler {
    pub fn new(reminders: Arc<dyn ReminderRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { reminders, clock }
    }

    pub async fn handle(&self, cmd: MarkReminderSentCommand) -> Result<Reminder, ReminderError> {
        let mut reminder = self
            .reminders
            .find_by_id(&cmd.reminder_id)
            .await?
            .ok_or(ReminderError::NotFound(cmd.reminder_id))?;

        reminder.mark_as_sent(self.clock.now());
        self.reminders.update(&reminder).await?;

        debug!(reminder_id = %reminder.id, "reminder marked sent");
        Ok(reminder)
    }
}
