//! Authentication route handlers

pub mod login;

pub use login::login;
