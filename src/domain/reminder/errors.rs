//! Reminder-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ReminderId};

/// Errors raised by reminder operations.
#[derive(Debug, Clone, Error)]
pub enum ReminderError {
    /// Reminder was not found.
    #[error("Reminder {0} not found")]
    NotFound(ReminderId),

    /// Persistence failure.
    #[error("Reminder storage error: {0}")]
    Infrastructure(String),
}

impl ReminderError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReminderError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ReminderError::NotFound(_) => ErrorCode::ReminderNotFound,
            ReminderError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for ReminderError {
    fn from(err: DomainError) -> Self {
        ReminderError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let id = ReminderId::new();
        let err = ReminderError::NotFound(id);
        assert_eq!(err.to_string(), format!("Reminder {} not found", id));
        assert_eq!(err.code(), ErrorCode::ReminderNotFound);
    }
}
