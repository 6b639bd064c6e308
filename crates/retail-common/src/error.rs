//! Error types shared across the retail tools

use thiserror::Error;

/// Result type alias for shared operations
pub type Result<T> = std::result::Result<T, CommonError>;

/// Errors raised by shared configuration helpers
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

impl CommonError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid-value error for a named setting
    pub fn invalid_value(key: &str, value: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
