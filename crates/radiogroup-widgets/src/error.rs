#![forbid(unsafe_code)]

//! Validation errors reported by host form fields.

use thiserror::Error;

/// Outcome of one validator.
pub type ValidationResult = std::result::Result<(), ValidationError>;

/// Reasons a host field rejects its current value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a value is required")]
    Required,

    #[error("invalid value: {reason}")]
    Invalid { reason: String },
}

impl ValidationError {
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}
