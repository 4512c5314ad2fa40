//! Tests for domain error conversions and messages

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_validation_error_bridges_into_domain_error() {
    let error: DomainError = ValidationError::required("email").into();
    assert!(matches!(
        error,
        DomainError::ValidationErr(ValidationError::RequiredField { ref field }) if field == "email"
    ));
    assert_eq!(error.to_string(), "Required field: email");
}

#[test]
fn test_auth_error_is_transparent() {
    let error: DomainError = AuthError::InvalidCredentials.into();
    assert_eq!(error.to_string(), "Invalid email or password");
}

#[test]
fn test_token_error_is_transparent() {
    let error: DomainError = TokenError::TokenExpired.into();
    assert_eq!(error.to_string(), "Token expired");
}

#[test]
fn test_constraint_violation_predicate() {
    let conflict = DomainError::ConstraintViolation {
        constraint: "uq_favorites_user_property".to_string(),
    };
    assert!(conflict.is_constraint_violation());

    let outage = DomainError::Persistence {
        message: "connection reset".to_string(),
    };
    assert!(!outage.is_constraint_violation());
}
