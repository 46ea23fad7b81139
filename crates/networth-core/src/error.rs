//! Core error types for networth-core.
//!
//! Most anomalies in the countdown path are absorbed into display states
//! rather than surfaced; these types cover the places where a caller does
//! want to know why something failed (config files, CLI input, projection
//! payloads).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for networth-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Target timestamp could not be used
    #[error("Target error: {0}")]
    Target(#[from] TargetError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
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

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Config directory could not be resolved or created
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Reasons a countdown target cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// No target was supplied (absent or blank)
    #[error("no target timestamp supplied")]
    Missing,

    /// The text is not a recognised timestamp
    #[error("malformed target timestamp '{0}'")]
    Malformed(String),

    /// The local wall-clock time cannot be placed on the timeline
    #[error("target '{0}' is outside the representable range")]
    OutOfRange(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
