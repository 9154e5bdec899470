//! Core error types for melwatch-core.
//!
//! The deadline engine itself has no failure mode: missing input suppresses
//! calculation, and a missing Category A interval produces a designated
//! "needs input" result. Errors here cover the ambient concerns -- config
//! files and input parsing at the presentation boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for melwatch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Discovery-input parse errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Discovery-input parse errors, surfaced at the CLI boundary only.
#[derive(Error, Debug)]
pub enum InputError {
    /// Malformed discovery date
    #[error("Invalid discovery date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Malformed discovery time
    #[error("Invalid discovery time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// Unknown MEL category letter
    #[error("Unknown MEL category '{0}': expected A, B, C or D")]
    InvalidCategory(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
