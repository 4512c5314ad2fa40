use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

use estate_api::{config, configure, logging, middleware::create_cors, AppState};
use estate_core::services::token::{TokenService, TokenServiceConfig};
use estate_infra::{DatabasePool, MySqlFavoriteRepository, MySqlUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = config::load_config().context("Failed to load configuration")?;
    logging::init_tracing(&config.logging).map_err(anyhow::Error::msg)?;

    tracing::info!(environment = %config.environment, "Starting estate listing API server");

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    pool.run_migrations()
        .await
        .context("Failed to run database migrations")?;

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));
    let favorites = Arc::new(MySqlFavoriteRepository::new(pool.get_pool().clone()));
    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let state = web::Data::new(AppState::new(favorites, users, token_service));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let server_config = config.server.clone();
    let environment = config.environment;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(create_cors(environment, &server_config))
            .wrap(TracingLogger::default())
            .configure(configure(state.clone(), server_config.max_payload_size))
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
