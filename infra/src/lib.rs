//! # Infrastructure Layer
//!
//! MySQL persistence for the estate listing backend. Provides the connection
//! pool, embedded migrations and the sqlx implementations of the repository
//! traits defined in `estate_core`.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlFavoriteRepository, MySqlUserRepository, PoolStatistics};

use thiserror::Error;

/// Infrastructure layer errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for infrastructure operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
