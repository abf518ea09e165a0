//! Foundation value objects and shared domain infrastructure.
//!
//! # Module Structure
//!
//! - `errors` - ValidationError, ErrorCode, DomainError
//! - `ids` - Strongly-typed identifiers
//! - `money` - Money value object (integer cents)
//! - `state_machine` - StateMachine trait for status enums
//! - `timestamp` - Immutable UTC instant

mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClientId, MembershipId, PaymentId, PlanId, ReminderId};
pub use money::Money;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
