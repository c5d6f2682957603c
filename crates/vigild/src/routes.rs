//! API routes for vigild.

use crate::aggregate;
use crate::server::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;
use vigil_common::{AnalysisRequest, AnalysisResult, HealthResponse};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Analyze Routes
// ============================================================================

pub fn analyze_routes() -> Router<AppStateArc> {
    Router::new()
        // Bare root kept for clients that predate the versioned path
        .route("/", post(analyze))
        .route("/v1/analyze", post(analyze))
}

/// Aggregate metrics for the requested regions.
///
/// Malformed bodies are rejected by the `Json` extractor before this handler
/// runs; the aggregation itself cannot fail.
async fn analyze(
    State(state): State<AppStateArc>,
    Json(req): Json<AnalysisRequest>,
) -> Json<AnalysisResult> {
    info!(
        "Analyzing {} region(s), threshold {}ms",
        req.regions.len(),
        req.threshold_ms
    );

    let results = aggregate::aggregate(state.store.records(), &req.regions, req.threshold_ms);

    Json(results)
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        records_loaded: state.store.len(),
        regions: state.store.regions(),
    })
}
