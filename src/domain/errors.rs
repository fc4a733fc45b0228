//! Domain error types
//!
//! Masking itself never fails; these errors cover the fallible surroundings
//! (configuration, logging setup, audit sinks, I/O). They don't expose
//! third-party error types.

use thiserror::Error;

/// Main PrivGuard error type
#[derive(Debug, Error)]
pub enum PrivGuardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Audit sink errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PrivGuardError {
    fn from(err: std::io::Error) -> Self {
        PrivGuardError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PrivGuardError {
    fn from(err: serde_json::Error) -> Self {
        PrivGuardError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PrivGuardError {
    fn from(err: toml::de::Error) -> Self {
        PrivGuardError::Configuration(format!("TOML parse error: {err}"))
    }
}
