//! Application handlers.
//!
//! One module per aggregate; each handler file carries its command (or
//! query), its result, and the handler itself.

pub mod membership;
pub mod payment;
pub mod plan;
pub mod reminder;
