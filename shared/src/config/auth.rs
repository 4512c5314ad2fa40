//! Authentication configuration module

use serde::{Deserialize, Serialize};

const DEVELOPMENT_SECRET: &str = "development-secret-please-change-in-production";

/// Access token signing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,

    /// Token issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Token audience claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEVELOPMENT_SECRET.to_string(),
            issuer: default_issuer(),
            audience: default_audience(),
            access_token_expiry_minutes: default_access_token_expiry(),
        }
    }
}

impl AuthConfig {
    /// Create a configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Whether the built-in development secret is still in use
    pub fn uses_development_secret(&self) -> bool {
        self.jwt_secret == DEVELOPMENT_SECRET
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.access_token_expiry_minutes * 60
    }
}

fn default_issuer() -> String {
    String::from("estate-listing")
}

fn default_audience() -> String {
    String::from("estate-listing-api")
}

fn default_access_token_expiry() -> i64 {
    60
}
