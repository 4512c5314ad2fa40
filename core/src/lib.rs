//! # Estate Core
//!
//! Core business logic and domain layer for the estate listing backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AccessToken, Claims, Favorite, FavoriteView, PropertyId, User, UserId};
pub use domain::value_objects::LoginCredential;
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    FavoriteRepository, FavoriteUnitOfWork, MockFavoriteRepository, MockUserRepository,
    UserRepository,
};
pub use services::{AuthService, FavoriteService, TokenService, TokenServiceConfig};
