//! In-memory implementations of the persistence ports.
//!
//! Each store keeps its aggregates in a `RwLock`ed map. Good for tests,
//! demos, and single-process deployments; a database-backed adapter set can
//! replace these behind the same ports.

pub mod membership_reader;
pub mod membership_repository;
pub mod payment_reader;
pub mod payment_repository;
pub mod plan_repository;
pub mod reminder_repository;

pub use membership_reader::MemoryMembershipReader;
pub use membership_repository::MemoryMembershipRepository;
pub use payment_reader::MemoryPaymentReader;
pub use payment_repository::MemoryPaymentRepository;
pub use plan_repository::MemoryPlanRepository;
pub use reminder_repository::MemoryReminderRepository;
