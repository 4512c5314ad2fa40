pub mod favorite;
pub mod user;

pub use favorite::{FavoriteRepository, FavoriteUnitOfWork, MockFavoriteRepository};
pub use user::{MockUserRepository, UserRepository};
