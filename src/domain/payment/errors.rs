//! Payment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId};

/// Errors raised by payment operations.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// Payment was not found.
    #[error("Payment {0} not found")]
    NotFound(PaymentId),

    /// Refund requested for a payment that is not completed.
    #[error("Only completed payments can be refunded (current status: {current})")]
    RefundNotAllowed { current: String },

    /// The requested status change is not a valid transition.
    #[error("Cannot transition payment from {current} to {attempted}")]
    InvalidTransition { current: String, attempted: String },

    /// A payment field failed validation.
    #[error("Payment validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    /// Persistence failure.
    #[error("Payment storage error: {0}")]
    Infrastructure(String),
}

impl PaymentError {
    pub fn refund_not_allowed(current: impl Into<String>) -> Self {
        PaymentError::RefundNotAllowed {
            current: current.into(),
        }
    }

    pub fn invalid_transition(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        PaymentError::InvalidTransition {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PaymentError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentError::NotFound(_) => ErrorCode::PaymentNotFound,
            PaymentError::RefundNotAllowed { .. } => ErrorCode::RefundNotAllowed,
            PaymentError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            PaymentError::Validation { .. } => ErrorCode::ValidationFailed,
            PaymentError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for PaymentError {
    fn from(err: DomainError) -> Self {
        PaymentError::Infrastructure(err.to_string())
    }
}
