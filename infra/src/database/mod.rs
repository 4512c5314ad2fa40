//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management and migrations
//! - Repository pattern implementations
//! - Mapping of driver errors into domain errors

pub mod connection;
pub mod errors;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlFavoriteRepository, MySqlUserRepository};
