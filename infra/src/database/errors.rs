//! Translation of sqlx errors into domain errors

use estate_core::errors::DomainError;

/// Map a driver error onto the domain taxonomy.
///
/// Unique-key violations become `ConstraintViolation` carrying the key name
/// when the driver exposes it; everything else is a persistence failure.
pub fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            let constraint = db_error
                .constraint()
                .map(str::to_string)
                .unwrap_or_else(|| db_error.message().to_string());
            return DomainError::ConstraintViolation { constraint };
        }
    }

    tracing::error!(error = %error, "database operation failed");
    DomainError::Persistence {
        message: error.to_string(),
    }
}
