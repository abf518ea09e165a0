//! Membership lifecycle domain module.
//!
//! A membership is a client's concrete instantiation of a plan over a date
//! range: active window, remaining visit allowance, and freeze state.
//!
//! # Module Structure
//!
//! - `aggregate` - Membership aggregate entity
//! - `errors` - Membership-specific errors
//! - `status` - MembershipStatus state machine

mod aggregate;
mod errors;
mod status;

pub use aggregate::{Membership, EXPIRY_WARNING_DAYS};
pub use errors::MembershipError;
pub use status::MembershipStatus;
