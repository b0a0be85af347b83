//! Error types for the access engine

use thiserror::Error;

/// Result type alias for the access engine
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the access engine
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unrecognized role string
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Unrecognized permission string
    #[error("Invalid permission: {0}")]
    InvalidPermission(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),
}
