//! Favorite property service module
//!
//! Maintains and queries the set of (user, property) favorite associations
//! with idempotent toggle semantics.

mod service;


pub use service::FavoriteService;
