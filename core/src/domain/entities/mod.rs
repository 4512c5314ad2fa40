//! Domain entities representing core business objects.

pub mod favorite;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use favorite::{Favorite, FavoriteView, PropertyId, UserId};
pub use token::{AccessToken, Claims};
pub use user::User;
