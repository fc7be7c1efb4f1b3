//! Domain error types
//!
//! This module defines the closed error hierarchy for the tap. Every failure
//! a run can end with is one of these variants, and none of them expose
//! third-party types.

use thiserror::Error;

/// Main tap error type
///
/// A run either emits every record or fails with exactly one of these.
#[derive(Debug, Error)]
pub enum TapError {
    /// Missing CLI argument, unreadable or invalid config file, missing apiKey
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request-class failures against the reporting API
    #[error("Report request error: {0}")]
    Report(#[from] ReportError),

    /// The output sink rejected a write or flush
    #[error("Sink error: {0}")]
    Sink(String),

    /// An envelope could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TapError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            TapError::Configuration(_) => 2,
            TapError::Report(_) => 3,
            TapError::Sink(_) => 4,
            TapError::Serialization(_) => 1,
        }
    }
}

/// Reporting API errors
///
/// Errors that occur while fetching the deployment report.
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Upstream answered with a status other than 200
    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// Request never produced a response
    #[error("Failed to connect to reporting API: {0}")]
    ConnectionFailed(String),

    /// Response body is not a usable record set
    #[error("Invalid response from reporting API: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for TapError {
    fn from(err: serde_json::Error) -> Self {
        TapError::Serialization(err.to_string())
    }
}
