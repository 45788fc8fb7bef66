//! Error types for the valuecast adapters

use thiserror::Error;
use valuecast_domain::CastError;

/// General adapter error type
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Cast(#[from] CastError),

    #[error("Model '{model}' not found in configuration. Available models: {}", available.join(", "))]
    UnknownModel {
        model: String,
        available: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
