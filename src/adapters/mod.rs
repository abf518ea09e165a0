//! Adapters - concrete implementations of the ports.

pub mod clock;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
