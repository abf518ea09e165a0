//! Reminder send status.

use serde::{Deserialize, Serialize};

/// Delivery status of a reminder.
///
/// Deliberately not a validated state machine: `mark_as_sent` and
/// `mark_as_failed` re-stamp unconditionally, so a retried dispatch simply
/// overwrites the previous outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendStatus {
    /// Waiting for the dispatcher.
    Pending,

    /// Handed to the delivery channel.
    Sent,

    /// Delivery attempt failed; `error_message` holds the detail.
    Failed,

    /// Withdrawn by staff before sending.
    Cancelled,
}

impl SendStatus {
    /// Returns the stored string form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SendStatus::Pending => "pending",
            SendStatus::Sent => "sent",
            SendStatus::Failed => "failed",
            SendStatus::Cancelled => "cancelled",
        }
    }

    /// True while the reminder still awaits dispatch.
    pub fn is_pending(&self) -> bool {
        *self == SendStatus::Pending
    }
}
