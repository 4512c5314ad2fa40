//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod favorite_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use favorite_repository_impl::{MySqlFavoriteRepository, MySqlFavoriteUnitOfWork};
pub use user_repository_impl::MySqlUserRepository;
