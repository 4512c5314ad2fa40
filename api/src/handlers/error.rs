//! Conversion of domain errors into HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use estate_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use estate_shared::errors::{error_codes, ErrorResponse};

/// Handler error carrying a domain error to the HTTP boundary
#[derive(Debug)]
pub struct ApiError {
    pub error: DomainError,
}

impl ApiError {
    pub fn new(error: DomainError) -> Self {
        Self { error }
    }

    /// Status code and machine-readable error code for the wrapped error
    fn classify(&self) -> (StatusCode, &'static str) {
        match &self.error {
            DomainError::ValidationErr(ValidationError::RequiredField { .. }) => {
                (StatusCode::BAD_REQUEST, error_codes::REQUIRED_FIELD)
            }
            DomainError::ValidationErr(ValidationError::InvalidEmail) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_EMAIL)
            }
            DomainError::Auth(AuthError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
            }
            DomainError::Auth(AuthError::AccountDisabled) => {
                (StatusCode::FORBIDDEN, error_codes::ACCOUNT_DISABLED)
            }
            DomainError::Token(TokenError::TokenExpired) => {
                (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED)
            }
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
            DomainError::Token(_) => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
            DomainError::ConstraintViolation { .. } => {
                (StatusCode::CONFLICT, error_codes::CONSTRAINT_VIOLATION)
            }
            DomainError::Persistence { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, error_codes::DATABASE_ERROR)
            }
            DomainError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        }
    }

    /// Client-facing message. Server-side failures never leak internals.
    fn public_message(&self, status: StatusCode) -> String {
        match status {
            StatusCode::SERVICE_UNAVAILABLE => "The database is temporarily unavailable".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR => "An internal error occurred".to_string(),
            _ => self.error.to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, code) = self.classify();

        if status.is_server_error() {
            tracing::error!(error = ?self.error, "request failed");
        } else {
            tracing::debug!(error = %self.error, code, "request rejected");
        }

        let mut body = ErrorResponse::new(code, self.public_message(status));
        if let DomainError::ValidationErr(ValidationError::RequiredField { field }) = &self.error {
            body = body.add_detail("field", field);
        }

        HttpResponse::build(status).json(body)
    }
}

/// 400 response for malformed bodies, paths and queries
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(error: DomainError) -> (StatusCode, serde_json::Value) {
        let response = ApiError::new(error).error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_required_field_carries_field_detail() {
        let (status, body) = body_json(ValidationError::required("email").into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "REQUIRED_FIELD");
        assert_eq!(body["details"]["field"], "email");
    }

    #[actix_web::test]
    async fn test_auth_errors() {
        let (status, body) = body_json(AuthError::InvalidCredentials.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "INVALID_CREDENTIALS");

        let (status, body) = body_json(AuthError::AccountDisabled.into()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "ACCOUNT_DISABLED");
    }

    #[actix_web::test]
    async fn test_token_errors() {
        let (status, body) = body_json(TokenError::TokenExpired.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "TOKEN_EXPIRED");

        let (status, body) = body_json(TokenError::InvalidSignature.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "TOKEN_INVALID");
    }

    #[actix_web::test]
    async fn test_persistence_failure_hides_details() {
        let (status, body) = body_json(DomainError::Persistence {
            message: "connection refused to 10.0.0.5".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.5"));
    }

    #[test]
    fn test_constraint_violation_is_conflict() {
        let error = ApiError::new(DomainError::ConstraintViolation {
            constraint: "uq_favorites_user_property".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }
}
