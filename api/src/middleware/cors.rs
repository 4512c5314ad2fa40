//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin. Other environments only allow the origins
//! listed in `server.allowed_origins`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use estate_shared::config::{Environment, ServerConfig};

/// Preflight cache lifetime in seconds
const MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for the given environment.
pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    if environment.is_development() || server.allowed_origins.is_empty() {
        create_permissive_cors()
    } else {
        create_restricted_cors(&server.allowed_origins)
    }
}

fn base_cors() -> Cors {
    Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(MAX_AGE)
}

/// Any origin; used in development and when no origins are configured
fn create_permissive_cors() -> Cors {
    tracing::info!("Configuring permissive CORS");
    base_cors().allow_any_origin()
}

fn create_restricted_cors(origins: &[String]) -> Cors {
    let mut cors = base_cors();
    for origin in origins.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        tracing::info!(origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }
    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_development_cors() {
        let _cors = create_cors(Environment::Development, &ServerConfig::default());
    }

    #[test]
    fn test_create_production_cors() {
        let mut server = ServerConfig::default();
        server.allowed_origins = vec![
            "https://estate.example.com".to_string(),
            " ".to_string(),
        ];

        let _cors = create_cors(Environment::Production, &server);
    }
}
