//! Telemetry dataset store.
//!
//! The dataset is read once at startup and shared read-only for the process
//! lifetime; request handling never mutates it.

use std::fs;
use std::path::Path;
use tracing::info;
use vigil_common::{TelemetryRecord, VigilError};

/// Immutable, process-wide telemetry dataset.
#[derive(Debug, Clone, Default)]
pub struct TelemetryStore {
    records: Vec<TelemetryRecord>,
}

impl TelemetryStore {
    /// Load the dataset from a JSON array file.
    ///
    /// Any failure here is fatal at startup: the daemon refuses to serve
    /// without its dataset.
    pub fn load(path: &Path) -> Result<Self, VigilError> {
        let contents = fs::read_to_string(path)?;
        let records: Vec<TelemetryRecord> = serde_json::from_str(&contents)?;
        info!(
            "Loaded {} telemetry records from {}",
            records.len(),
            path.display()
        );
        Ok(Self { records })
    }

    /// Build a store from already-materialized records.
    pub fn from_records(records: Vec<TelemetryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, deduplicated region names observed in the dataset.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| r.region.clone())
            .collect();
        regions.sort();
        regions.dedup();
        regions
    }
}
