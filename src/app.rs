use crate::core::config::Config;
use crate::core::http::start_http;
use crate::core::logger::{LoggingGuard, targets};
use crate::core::state::State;
use crate::routes::Routes;
use anyhow::Context;
use tracing::info;

pub async fn app() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load();

    let _logging_guard = LoggingGuard::initialize("logs", Some(config.log_retention_days))
        .context("Failed to initialize logger")?;
    info!(target: targets::SYSTEM, "Logger initialized with daily rotation and retention policy");

    // Setup database connection pool
    let db = config.setup_database().await?;
    info!(
        target: targets::SYSTEM,
        max_connections = config.db_max_connections,
        "Database pool established"
    );

    let state = State::init(db, config.clone()).await;

    // Setup routes and middleware
    let routes = Routes::generate(state.clone());

    // Start the HTTP server; returns after graceful shutdown
    let served = start_http(routes, &config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start HTTP server: {}", e));

    state.shutdown().await;

    served
}
