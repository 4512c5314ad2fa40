//! Request and response bodies

pub mod auth;
pub mod favorite;

pub use auth::{LoginRequest, LoginResponse};
pub use favorite::{FavoriteCountResponse, FavoriteListQuery, FavoriteStatusResponse, ToggleFavoriteResponse};
