//! Intern Portal API Server
//!
//! Run with: cargo run --bin intern-portal
//!
//! # Configuration
//!
//! Read from `PORTAL_CONFIG`, `~/.config/intern-portal/config.toml`,
//! `/etc/intern-portal/config.toml` or `./config.toml`, then overridden by:
//! - `PORTAL_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PORTAL_PORT` / `PORT`: Port to listen on (default: 3000)
//! - `PORTAL_ENV`: `development` or `production`, selects CORS origins
//! - `PORTAL_CORS_ORIGINS`: Comma separated origin list
//! - `PORTAL_LOG_LEVEL`, `PORTAL_LOG_FORMAT`: Logging filter and format
//! - `RUST_LOG`: Log filter, wins over `PORTAL_LOG_LEVEL`

use anyhow::Context;
use intern_portal::api::{serve, AppState};
use intern_portal::config::Config;
use intern_portal::logging::init_tracing;
use intern_portal::portal::StaticRepository;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default().context("Invalid configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Intern Portal API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.cors.environment);
    tracing::info!("Allowed origins: {:?}", config.cors.allowed_origins());

    let repository = StaticRepository::default();
    tracing::info!(
        "Serving static data for {} participants",
        repository.participant_count()
    );

    let api_config = config.api.clone();
    let state = AppState::new(Arc::new(repository), config);

    serve(state, &api_config).await?;

    tracing::info!("Intern Portal API stopped");
    Ok(())
}
