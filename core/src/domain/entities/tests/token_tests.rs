//! Tests for token claims

use chrono::Duration;

use crate::domain::entities::token::Claims;

#[test]
fn test_access_token_claims() {
    let claims = Claims::new_access_token(42, "estate-listing", "estate-listing-api", Duration::minutes(60));

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.user_id().unwrap(), 42);
    assert_eq!(claims.iss, "estate-listing");
    assert_eq!(claims.aud, "estate-listing-api");
    assert_eq!(claims.exp - claims.iat, 3600);
    assert!(!claims.is_expired());
}

#[test]
fn test_unique_jti() {
    let a = Claims::new_access_token(1, "iss", "aud", Duration::minutes(1));
    let b = Claims::new_access_token(1, "iss", "aud", Duration::minutes(1));
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_non_numeric_subject() {
    let mut claims = Claims::new_access_token(1, "iss", "aud", Duration::minutes(1));
    claims.sub = "not-a-number".to_string();
    assert!(claims.user_id().is_err());
}

#[test]
fn test_expired_claims() {
    let claims = Claims::new_access_token(1, "iss", "aud", Duration::seconds(-5));
    assert!(claims.is_expired());
}
