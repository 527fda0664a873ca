//! Error types for the STRATO updater
//!
//! Update cycles never surface these; they absorb every failure into an
//! [`UpdateResult`](crate::updater::UpdateResult). Errors only escape from
//! configuration handling and activation.

use thiserror::Error;

/// Result type alias for STRATO operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the STRATO updater
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (rejected before any network call)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The eager update at activation did not succeed
    #[error("Activation failed: {0}")]
    Activation(String),

    /// HTTP client construction or usage errors
    #[error("HTTP error: {0}")]
    Http(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an activation error
    pub fn activation(msg: impl Into<String>) -> Self {
        Self::Activation(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}
