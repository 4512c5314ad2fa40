//! Favorite property route handlers
//!
//! Everything except the public counter runs behind `JwtAuth`; the acting
//! user always comes from the verified token.

pub mod count;
pub mod list;
pub mod remove;
pub mod status;
pub mod toggle;

pub use count::favorite_count;
pub use list::list_favorites;
pub use remove::remove_favorite;
pub use status::favorite_status;
pub use toggle::toggle_favorite;
