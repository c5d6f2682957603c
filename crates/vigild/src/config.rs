//! Configuration management for vigild.
//!
//! Loads settings from /etc/vigil/config.toml or uses defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};
use vigil_common::VigilError;

/// Config file path
pub const CONFIG_PATH: &str = "/etc/vigil/config.toml";

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VigilConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Path to the telemetry dataset (JSON array of records)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Overall per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_listen_addr() -> String {
    // Localhost only; a reverse proxy fronts external traffic
    "127.0.0.1:7410".to_string()
}

fn default_dataset_path() -> String {
    "/var/lib/vigil/telemetry.json".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for VigilConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            dataset_path: default_dataset_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl VigilConfig {
    /// Load the config, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_PATH).unwrap_or_else(|e| {
            warn!("Config not found, using defaults: {}", e);
            VigilConfig::default()
        })
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &str) -> Result<Self, VigilError> {
        let content = fs::read_to_string(path)?;
        let config: VigilConfig =
            toml::from_str(&content).map_err(|e| VigilError::Config(e.to_string()))?;
        info!("Loaded config from {}", path);
        Ok(config)
    }
}
