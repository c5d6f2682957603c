//! JSON schemas for the vigil HTTP API.

use serde::{Deserialize, Serialize};

/// Request to analyze a set of regions against a latency threshold.
///
/// `regions` may contain duplicates or names absent from the dataset;
/// `threshold_ms` may be any integer, including negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub regions: Vec<String>,
    pub threshold_ms: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub records_loaded: usize,
    pub regions: Vec<String>,
}
