//! Error types for Fleetsite

use thiserror::Error;

/// Main error type for Fleetsite setup operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration value out of range or inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

/// Failure reported by a [`Submitter`](crate::submit::Submitter).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint answered but refused the record
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The record never reached the endpoint
    #[error("Transport error: {0}")]
    Transport(String),
}
