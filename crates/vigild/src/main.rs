//! Vigil daemon - per-region telemetry analytics service.
//!
//! Loads a static telemetry dataset at startup and serves summary
//! statistics over HTTP.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, Level};
use vigild::config::VigilConfig;
use vigild::server::{self, AppState};
use vigild::store::TelemetryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("vigild v{} starting", env!("CARGO_PKG_VERSION"));

    let config = VigilConfig::load();

    // Without its dataset the daemon has nothing to serve: refuse to start.
    let store = TelemetryStore::load(Path::new(&config.dataset_path))
        .with_context(|| format!("failed to load telemetry dataset {}", config.dataset_path))?;
    info!(
        "Dataset ready: {} records across {} regions",
        store.len(),
        store.regions().len()
    );

    server::run(AppState::new(store), &config).await
}
