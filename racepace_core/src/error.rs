//! Error types for the racepace_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for racepace_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The training configuration was rejected before any computation ran
    /// (malformed goal time, bad day selection, impossible dates)
    #[error("Invalid training configuration: {0}")]
    ConfigValidation(String),

    /// A scheduling constraint cannot be satisfied (enforced rest days with no
    /// alternative, or an internal day-count mismatch)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A generator or resolver produced an impossible value. Should be
    /// unreachable with a validated configuration.
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Application configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
