//! HTTP server for vigild.

use crate::config::VigilConfig;
use crate::middleware;
use crate::routes;
use crate::store::TelemetryStore;
use anyhow::Result;
use axum::http::Method;
use axum::Router;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<TelemetryStore>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: TelemetryStore) -> Self {
        Self {
            store: Arc::new(store),
            start_time: Instant::now(),
        }
    }
}

/// Build the application router with all layers applied.
pub fn app(state: Arc<AppState>, config: &VigilConfig) -> Router {
    // Browser clients post from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .merge(routes::analyze_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::body_size_limit))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors)
}

/// Run the HTTP server
pub async fn run(state: AppState, config: &VigilConfig) -> Result<()> {
    let state = Arc::new(state);
    let app = app(state, config);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
