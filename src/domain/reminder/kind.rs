//! Reminder classification enums.

use serde::{Deserialize, Serialize};

/// What the reminder is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// A membership is about to run out.
    SubscriptionExpiry,
    /// A payment is due.
    PaymentDue,
    /// Client birthday greeting.
    Birthday,
    /// Nudge after a long absence.
    Visit,
    /// Anything else.
    Other,
}

/// Delivery channel for a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendMethod {
    Email,
    Sms,
    Push,
    Whatsapp,
    Telegram,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_serialize_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReminderKind::SubscriptionExpiry).unwrap(),
            "\"subscription_expiry\""
        );
        assert_eq!(
            serde_json::to_string(&SendMethod::Whatsapp).unwrap(),
            "\"whatsapp\""
        );
    }
}
