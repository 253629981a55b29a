//! Error types for host configuration.
//!
//! Option resolution itself never fails: missing data resolves to "nothing
//! selected". Only reading loosely typed host attributes can go wrong.

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a select's host attributes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A recognized attribute has a value of the wrong shape.
    #[error("Invalid value for attribute '{key}': expected {expected}")]
    InvalidAttribute { key: String, expected: &'static str },

    /// The configuration attributes could not be deserialized.
    #[error("Invalid select configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid attribute error.
    pub fn invalid_attribute(key: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidAttribute {
            key: key.into(),
            expected,
        }
    }
}
