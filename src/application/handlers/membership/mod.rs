//! Membership lifecycle handlers.
//!
//! ## Commands
//! - Selling a membership from a plan
//! - Registering a visit at the door
//! - Freezing and unfreezing
//!
//! ## Queries
//! - Dashboard statistics

mod create_membership;
mod freeze_membership;
mod get_membership_stats;
mod register_visit;
mod unfreeze_membership;

pub use create_membership::{CreateMembershipCommand, CreateMembershipHandler};
pub use freeze_membership::{FreezeMembershipCommand, FreezeMembershipHandler};
pub use get_membership_stats::{GetMembershipStatsHandler, GetMembershipStatsQuery};
pub use register_visit::{RegisterVisitCommand, RegisterVisitHandler, RegisterVisitResult};
pub use unfreeze_membership::{UnfreezeMembershipCommand, UnfreezeMembershipHandler};
