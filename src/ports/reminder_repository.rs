//! Reminder repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, ReminderId, Timestamp};
use crate::domain::reminder::Reminder;

/// Repository port for Reminder persistence.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Save a new reminder.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError>;

    /// Update an existing reminder.
    ///
    /// # Errors
    ///
    /// - `ReminderNotFound` if the reminder doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, reminder: &Reminder) -> Result<(), DomainError>;

    /// Find a reminder by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>, DomainError>;

    /// All reminders for a client, earliest send date first.
    async fn find_by_client(&self, client_id: &ClientId) -> Result<Vec<Reminder>, DomainError>;

    /// Pending reminders whose send date is at or before `now`, earliest
    /// first. This is the dispatcher's work queue.
    async fn find_due(&self, now: Timestamp) -> Result<Vec<Reminder>, DomainError>;
}
