//! Error types for trueno-scientist
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)
//!
//! These errors cover setup and collaborators only. The failure type of a
//! control or candidate operation is the caller's own `E` and is never wrapped.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// trueno-scientist error types
#[derive(Error, Debug)]
pub enum Error {
    /// Experiment definition is incomplete or malformed
    #[error("Invalid experiment: {0}")]
    InvalidExperiment(String),

    /// Runner configuration could not be parsed
    #[error("Invalid runner configuration: {0}")]
    Config(String),

    /// Observation sink rejected an observation
    #[error("Publish failed for experiment '{experiment}': {reason}")]
    PublishFailed {
        /// Name of the experiment whose observation was rejected
        experiment: String,
        /// Sink-specific failure description
        reason: String,
    },

    /// Global tracing subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
