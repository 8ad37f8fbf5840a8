//! Core error types for liftlog-core.
//!
//! Storage is the only fallible boundary in this crate: domain mutations
//! clamp out-of-range values instead of rejecting them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Data directory could not be determined or created
    #[error("Failed to prepare data directory {path}: {message}")]
    DataDir { path: PathBuf, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parse errors
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration serialization errors
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Unknown configuration key in get/set
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Configuration value could not be parsed for the target field
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for StoreError
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
