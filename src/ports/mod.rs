//! Ports - contracts between the core and its collaborators.
//!
//! Repositories are the write side (load by identifier, upsert, simple
//! filters); readers are the read-only reporting side. Implementations must
//! guarantee atomic single-record updates; the core performs one
//! read-modify-write per transition and nothing more.

mod clock;
mod membership_reader;
mod membership_repository;
mod payment_reader;
mod payment_repository;
mod plan_repository;
mod reminder_repository;

pub use clock::Clock;
pub use membership_reader::{MembershipReader, MembershipStatistics, PlanActiveCount, StatisticsWindows};
pub use membership_repository::MembershipRepository;
pub use payment_reader::{PaymentReader, PaymentStatistics};
pub use payment_repository::PaymentRepository;
pub use plan_repository::PlanRepository;
pub use reminder_repository::ReminderRepository;
