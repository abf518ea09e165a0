//! Payment domain module.
//!
//! Payments record money taken from clients and, for subscription charges,
//! the date range the money covers. Period resolution mirrors membership
//! date arithmetic through the shared plan duration resolver.
//!
//! # Module Structure
//!
//! - `aggregate` - Payment aggregate entity and period resolution
//! - `errors` - Payment-specific errors
//! - `kind` - PaymentKind and PaymentMethod enums
//! - `status` - PaymentStatus state machine

mod aggregate;
mod errors;
mod kind;
mod status;

pub use aggregate::Payment;
pub use errors::PaymentError;
pub use kind::{PaymentKind, PaymentMethod};
pub use status::PaymentStatus;
