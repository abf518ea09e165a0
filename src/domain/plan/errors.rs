//! Plan-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, ValidationError};

/// Errors raised by plan catalog operations.
#[derive(Debug, Clone, Error)]
pub enum PlanError {
    /// Plan was not found.
    #[error("Plan {0} not found")]
    NotFound(PlanId),

    /// Plan still has active memberships and cannot be deleted.
    #[error("Plan {0} is in use by {1} active membership(s)")]
    InUse(PlanId, u64),

    /// A plan field failed validation.
    #[error("Plan validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence failure.
    #[error("Plan storage error: {0}")]
    Infrastructure(String),
}

impl PlanError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::NotFound(_) => ErrorCode::PlanNotFound,
            PlanError::InUse(_, _) => ErrorCode::PlanInUse,
            PlanError::Validation(e) => e.code(),
            PlanError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        PlanError::Infrastructure(err.to_string())
    }
}
