//! Reminder handlers.
//!
//! ## Commands
//! - Marking a reminder sent or failed after a dispatch attempt
//!
//! ## Queries
//! - Listing reminders due for dispatch

mod list_due_reminders;
mod mark_reminder_failed;
mod mark_reminder_sent;

pub use list_due_reminders::{ListDueRemindersHandler, ListDueRemindersQuery};
pub use mark_reminder_failed::{MarkReminderFailedCommand, MarkReminderFailedHandler};
pub use mark_reminder_sent::{MarkReminderSentCommand, MarkReminderSentHandler};
