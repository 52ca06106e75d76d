//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppErrors`.

use anyhow::Context;
use axum::Router;
use clients::{PgClientRepository, clients_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{PgUserRepository, UsersConfig, users_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::AppError,
    errors::{AppErrors, AppResult},
    kind::ErrorKind,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,clients=info,users=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
        Err(_) => DEFAULT_MAX_CONNECTIONS,
    };

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let users_config = UsersConfig::from_env();
    tracing::info!(
        profile_image_bucket = %users_config.profile_image_bucket,
        "Users configuration loaded"
    );

    // Build router
    let app = Router::new()
        .merge(clients_router(PgClientRepository::new(pool.clone())))
        .merge(users_router(PgUserRepository::new(pool), users_config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
