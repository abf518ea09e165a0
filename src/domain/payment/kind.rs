//! Payment classification enums.

use serde::{Deserialize, Serialize};

/// What the payment was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Membership plan purchase or renewal.
    Subscription,
    /// One-on-one training session.
    Training,
    /// Locker rental.
    Locker,
    /// Anything else.
    Other,
}

/// How the money arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Online,
}
