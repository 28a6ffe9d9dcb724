//! Error types for the user system
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// A required field was missing or blank.
    #[error("{reason}")]
    Validation { reason: String },

    /// Another user already holds this name or clash ID.
    #[error("User already exists.")]
    Conflict { name: String, clash_id: String },

    /// No user matches the given name and password.
    #[error("Invalid name or password.")]
    Auth,
}

impl UserError {
    /// Error returned when any required field is blank.
    pub(crate) fn fields_required() -> Self {
        UserError::Validation {
            reason: "All fields are required.".to_string(),
        }
    }

    /// Check if this error is a missing-field rejection.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, UserError::Validation { .. })
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        matches!(self, UserError::Conflict { .. })
    }

    /// Check if this error is a failed credential check.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, UserError::Auth)
    }
}
