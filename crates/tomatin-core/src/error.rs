//! Error types for tomatin-core.
//!
//! The reducer itself is infallible; errors only arise at the boundaries,
//! when validating user input or talking to disk.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for tomatin-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the durable key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The data directory could not be resolved or created
    #[error("Failed to resolve data directory: {0}")]
    DataDir(std::io::Error),

    /// Failed to open the store
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Snapshot could not be encoded
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The data directory could not be resolved or created
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing or unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors, raised before an action reaches the reducer.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Mode names identify modes and must be non-empty
    #[error("Mode name must not be empty")]
    EmptyModeName,

    /// Phase durations must be positive
    #[error("Duration for '{field}' must be greater than zero")]
    ZeroDuration { field: &'static str },

    /// Mode names are unique across built-in and custom modes
    #[error("A mode named '{0}' already exists")]
    DuplicateMode(String),

    /// Referenced mode does not exist
    #[error("No mode named '{0}'")]
    UnknownMode(String),

    /// Volume is a fraction of full scale
    #[error("Volume must be between 0.0 and 1.0, got {0}")]
    VolumeOutOfRange(f32),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
