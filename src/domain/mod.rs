//! Domain layer: aggregates, value objects, and lifecycle rules.

pub mod foundation;
pub mod membership;
pub mod payment;
pub mod plan;
pub mod reminder;
