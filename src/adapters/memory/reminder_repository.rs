//! In-memory implementation of ReminderRepository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, ReminderId, Timestamp};
use crate::domain::reminder::Reminder;
use crate::ports::ReminderRepository;

/// In-memory implementation of the ReminderRepository port.
#[derive(Default)]
pub struct MemoryReminderRepository {
    reminders: RwLock<HashMap<ReminderId, Reminder>>,
}

impl MemoryReminderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ReminderId, Reminder>>, DomainError> {
        self.reminders
            .read()
            .map_err(|_| DomainError::storage("reminder store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ReminderId, Reminder>>, DomainError> {
        self.reminders
            .write()
            .map_err(|_| DomainError::storage("reminder store lock poisoned"))
    }
}

#[async_trait]
impl ReminderRepository for MemoryReminderRepository {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError> {
        self.write()?.insert(reminder.id, reminder.clone());
        Ok(())
    }

    async fn update(&self, reminder: &Reminder) -> Result<(), DomainError> {
        let mut reminders = self.write()?;
        match reminders.get_mut(&reminder.id) {
            Some(slot) => {
                *slot = reminder.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ReminderNotFound,
                format!("Reminder {} not found", reminder.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>, DomainError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_client(&self, client_id: &ClientId) -> Result<Vec<Reminder>, DomainError> {
        let mut result: Vec<Reminder> = self
            .read()?
            .values()
            .filter(|r| &r.client_id == client_id)
            .cloned()
            .collect();
        result.sort_by_key(|r| r.send_date);
        Ok(result)
    }

    async fn find_due(&self, now: Timestamp) -> Result<Vec<Reminder>, DomainError> {
        let mut due: Vec<Reminder> = self
            .read()?
            .values()
            .filter(|r| r.send_status.is_pending() && r.send_date <= now)
            .cloned()
            .collect();
        due.sort_by_key(|r| r.send_date);
        Ok(due)
    }
}
