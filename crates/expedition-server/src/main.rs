//! Process entry point for the Expedition data service.
//!
//! Initializes logging, loads configuration from environment variables,
//! connects to `PostgreSQL`, runs migrations, and serves the REST API
//! until the process is terminated.

mod config;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use expedition_api::{AppState, ServerConfig, start_server};
use expedition_db::{PostgresConfig, PostgresPool};

use crate::config::ServerSettings;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, database setup, or the server
/// loop fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("expedition-server starting");

    // Load configuration from environment
    let settings = ServerSettings::from_env()?;
    info!(
        host = settings.host,
        port = settings.port,
        db_max_connections = settings.db_max_connections,
        "configuration loaded"
    );

    // Connect to PostgreSQL and apply migrations
    let pg_config = PostgresConfig::new(&settings.database_url)
        .with_max_connections(settings.db_max_connections);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    // Serve the REST API
    let state = Arc::new(AppState::new(pool.clone()));
    let server_config = ServerConfig {
        host: settings.host,
        port: settings.port,
    };

    info!("entering serve loop");
    let result = start_server(&server_config, state).await;

    pool.close().await;
    result?;

    Ok(())
}
