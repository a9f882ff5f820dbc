//! Error types for the core library.

use thiserror::Error;

use crate::service::ServiceError;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A query definition cannot be resolved to a query string.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller passed a value the API does not accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The execution service did not deliver results.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Configuration`] with the given message.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
