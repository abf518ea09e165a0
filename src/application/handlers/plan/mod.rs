//! Plan catalog handlers.
//!
//! ## Commands
//! - Creating plans
//! - Deleting plans (guarded by active membership count)
//!
//! ## Queries
//! - Listing plans offered for sale

mod create_plan;
mod delete_plan;
mod list_active_plans;

pub use create_plan::{CreatePlanCommand, CreatePlanHandler};
pub use delete_plan::{DeletePlanCommand, DeletePlanHandler};
pub use list_active_plans::{ListActivePlansHandler, ListActivePlansQuery};
