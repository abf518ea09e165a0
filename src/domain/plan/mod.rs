//! Plan catalog domain module.
//!
//! Membership plans are reusable pricing/duration/visit-limit templates.
//! The duration resolution rule lives here and is shared by membership
//! creation and payment period derivation.
//!
//! # Module Structure
//!
//! - `aggregate` - Plan aggregate entity
//! - `errors` - Plan-specific errors
//! - `period` - PeriodUnit and the shared duration resolver

mod aggregate;
mod errors;
mod period;

pub use aggregate::Plan;
pub use errors::PlanError;
pub use period::{resolve_duration, PeriodUnit};
