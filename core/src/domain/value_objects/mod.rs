//! Value objects for domain modeling

pub mod login_credential;

pub use login_credential::LoginCredential;
