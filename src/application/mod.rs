//! Application layer - commands, queries, and their handlers.
//!
//! Orchestrates domain operations over the ports. Command handlers drive
//! the write side; query handlers serve the read side.

pub mod handlers;
