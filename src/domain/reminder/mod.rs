//! Reminder domain module.
//!
//! Reminders are scheduled outbound notifications tied to expiry or payment
//! events. The core only schedules and stamps them; actual delivery is an
//! external dispatcher's job.
//!
//! # Module Structure
//!
//! - `aggregate` - Reminder aggregate entity and the scheduling rule
//! - `errors` - Reminder-specific errors
//! - `kind` - ReminderKind and SendMethod enums
//! - `status` - SendStatus enum

mod aggregate;
mod errors;
mod kind;
mod status;

pub use aggregate::{Reminder, REMINDER_LEAD_DAYS};
pub use errors::ReminderError;
pub use kind::{ReminderKind, SendMethod};
pub use status::SendStatus;
