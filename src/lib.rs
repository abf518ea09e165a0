//! ClubTrack - Fitness Club Management Core
//!
//! This crate implements the record-keeping core of a fitness club:
//! membership plans, membership lifecycles, payments with derived billing
//! periods, expiry reminders, and reporting aggregates.
//!
//! Presentation, HTTP routing, and durable storage are collaborator
//! concerns; the `ports` module defines the contracts they implement.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
