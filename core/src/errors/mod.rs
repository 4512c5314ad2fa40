//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// A uniqueness or integrity constraint rejected a write
    #[error("Constraint violation: {constraint}")]
    ConstraintViolation { constraint: String },

    /// The store could not be reached or failed mid-operation
    #[error("Persistence failure: {message}")]
    Persistence { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DomainError::ConstraintViolation { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
