//! Core data types for region telemetry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single telemetry observation as it appears in the dataset file.
///
/// Records are tolerant of sparse data: a record without a `region` never
/// matches any request, and absent numeric fields count as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryRecord {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub latency_ms: f64,
    #[serde(default)]
    pub uptime_pct: f64,
}

/// Aggregated metrics for a single region.
///
/// The three averages are rounded to 2 decimals, half away from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

/// Analysis output: region name -> aggregated metrics.
///
/// Regions with no matching records are absent rather than reported as
/// errors. The ordered map keeps the serialized response deterministic.
pub type AnalysisResult = BTreeMap<String, RegionMetrics>;
