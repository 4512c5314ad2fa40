//! Authentication service module
//!
//! Email and password login issuing a bearer access token.

mod service;


pub use service::AuthService;
