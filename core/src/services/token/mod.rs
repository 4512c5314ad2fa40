//! Token service module for JWT management
//!
//! Issues and verifies the HS256 access tokens handed out at login and
//! presented as bearer credentials on favorites endpoints.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
