//! Favorite association repository module.

mod r#trait;
pub use r#trait::{FavoriteRepository, FavoriteUnitOfWork};

mod mock;
pub use mock::{MockFavoriteRepository, MockFavoriteUnitOfWork};
