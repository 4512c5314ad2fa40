//! Application state and route wiring
//!
//! This module holds the shared services and registers every endpoint on an
//! actix-web `ServiceConfig`, so the binary and the integration tests build
//! the same application.

use actix_web::{error::InternalError, web, HttpResponse};
use std::sync::Arc;

use estate_core::repositories::{FavoriteRepository, UserRepository};
use estate_core::services::{AuthService, FavoriteService, TokenService};
use estate_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::bad_request;
use crate::middleware::JwtAuth;
use crate::routes::{auth, favorites};

/// Application state that holds shared services
pub struct AppState<F, U>
where
    F: FavoriteRepository,
    U: UserRepository,
{
    pub favorite_service: Arc<FavoriteService<F>>,
    pub auth_service: Arc<AuthService<U>>,
    pub token_service: Arc<TokenService>,
}

impl<F, U> AppState<F, U>
where
    F: FavoriteRepository,
    U: UserRepository,
{
    /// Build the services on top of the given repositories
    pub fn new(favorites: Arc<F>, users: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            favorite_service: Arc::new(FavoriteService::new(favorites)),
            auth_service: Arc::new(AuthService::new(users, Arc::clone(&token_service))),
            token_service,
        }
    }
}

/// Register state, extractor settings and all routes
pub fn configure<F, U>(
    state: web::Data<AppState<F, U>>,
    max_payload_size: usize,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    F: FavoriteRepository + 'static,
    U: UserRepository + 'static,
{
    move |cfg: &mut web::ServiceConfig| {
        let jwt_auth = JwtAuth::new(Arc::clone(&state.token_service));

        cfg.app_data(state)
            .app_data(
                web::JsonConfig::default()
                    .limit(max_payload_size)
                    .error_handler(|err, _req| {
                        let response = bad_request(format!("Invalid request body: {}", err));
                        InternalError::from_response(err, response).into()
                    }),
            )
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                let response = bad_request(format!("Invalid path parameter: {}", err));
                InternalError::from_response(err, response).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                let response = bad_request(format!("Invalid query string: {}", err));
                InternalError::from_response(err, response).into()
            }))
            // Health check endpoint
            .route("/health", web::get().to(health_check))
            // API v1 routes
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/auth")
                            .route("/login", web::post().to(auth::login::<F, U>)),
                    )
                    .service(
                        web::scope("/favorites")
                            .route("", web::get().to(favorites::list_favorites::<F, U>))
                            .service(
                                web::resource("/{property_id}")
                                    .route(web::get().to(favorites::favorite_status::<F, U>))
                                    .route(web::delete().to(favorites::remove_favorite::<F, U>)),
                            )
                            .route(
                                "/{property_id}/toggle",
                                web::post().to(favorites::toggle_favorite::<F, U>),
                            )
                            .wrap(jwt_auth),
                    )
                    .route(
                        "/properties/{property_id}/favorites/count",
                        web::get().to(favorites::favorite_count::<F, U>),
                    ),
            )
            // Default 404 handler
            .default_service(web::route().to(not_found));
    }
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "estate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
