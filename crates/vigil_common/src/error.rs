//! Error types for vigil.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VigilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
