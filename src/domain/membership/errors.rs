//! Membership-specific error types.
//!
//! Lifecycle precondition failures are ordinary negative results: the
//! message in `Display` is what staff see, and no variant is fatal.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, MembershipId, PlanId};

/// Errors raised by membership lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum MembershipError {
    /// Membership was not found.
    #[error("Membership {0} not found")]
    NotFound(MembershipId),

    /// The referenced plan was not found.
    #[error("Plan {0} not found")]
    PlanNotFound(PlanId),

    /// The referenced plan is no longer offered for sale.
    #[error("Plan {0} is not active")]
    PlanInactive(PlanId),

    /// The plan does not permit freezing.
    #[error("Plan does not support freezing")]
    FreezeNotSupported,

    /// Unfreeze was requested but the membership is not frozen.
    #[error("Membership is not frozen")]
    NotFrozen,

    /// The requested status change is not a valid transition.
    #[error("Cannot transition membership from {current} to {attempted}")]
    InvalidTransition { current: String, attempted: String },

    /// Entry was refused at the door.
    #[error("Entry denied: {reason}")]
    EntryDenied { reason: String },

    /// A membership field failed validation.
    #[error("Membership validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    /// Persistence failure.
    #[error("Membership storage error: {0}")]
    Infrastructure(String),
}

impl MembershipError {
    pub fn invalid_transition(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        MembershipError::InvalidTransition {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn entry_denied(reason: impl Into<String>) -> Self {
        MembershipError::EntryDenied {
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::NotFound(_) => ErrorCode::MembershipNotFound,
            MembershipError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            MembershipError::PlanInactive(_) => ErrorCode::PlanInactive,
            MembershipError::FreezeNotSupported => ErrorCode::FreezeNotAllowed,
            MembershipError::NotFrozen => ErrorCode::NotFrozen,
            MembershipError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            MembershipError::EntryDenied { .. } => ErrorCode::MembershipNotActive,
            MembershipError::Validation { .. } => ErrorCode::ValidationFailed,
            MembershipError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        MembershipError::Infrastructure(err.to_string())
    }
}
