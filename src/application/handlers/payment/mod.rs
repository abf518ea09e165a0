//! Payment handlers.
//!
//! ## Commands
//! - Recording payments (period resolution and expiry reminder scheduling)
//! - Refunding completed payments
//!
//! ## Queries
//! - Payment totals

mod get_payment_stats;
mod record_payment;
mod refund_payment;

pub use get_payment_stats::{GetPaymentStatsHandler, GetPaymentStatsQuery};
pub use record_payment::{RecordPaymentCommand, RecordPaymentHandler, RecordPaymentResult};
pub use refund_payment::{RefundPaymentCommand, RefundPaymentHandler};
