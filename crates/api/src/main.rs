use anyhow::{Context, Result};
use tracing::info;

use mentor_hub_api::app::{self, Backend};
use mentor_hub_api::{config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!("Starting Mentor Hub API v{}", env!("CARGO_PKG_VERSION"));

    let backend = if config.database.in_memory {
        info!("Using in-memory storage; records are lost on shutdown");
        Backend::InMemory
    } else {
        let pool = persistence::db::create_pool(&config.persistence_config())
            .await
            .context("Failed to connect to database")?;

        info!("Ensuring database schema...");
        persistence::db::ensure_schema(&pool)
            .await
            .context("Failed to create database schema")?;
        info!("Database schema ready");

        Backend::Postgres(pool)
    };

    let addr = config.socket_addr()?;
    let app = app::create_app(config, backend)?;

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
