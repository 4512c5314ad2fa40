//! Business services containing domain logic and use cases.

pub mod auth;
pub mod favorite;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use favorite::FavoriteService;
pub use token::{TokenService, TokenServiceConfig};
