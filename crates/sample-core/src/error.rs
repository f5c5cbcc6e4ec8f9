//! # Error Types
//!
//! Three error families, matching where a failure is detected:
//!
//! - [`ParseError`]: malformed caller input (`-k` pairs, `-d` JSON). Always
//!   detected locally, before any service or network call.
//! - [`NetworkError`]: an outbound echo-service call did not produce a JSON
//!   object (connection failure, timeout, non-2xx status, undecodable body).
//! - [`ValidationError`]: a well-formed value that is not acceptable. Data
//!   processing accepts every well-formed input, so today this is only raised
//!   while validating client configuration.

use thiserror::Error;

/// Malformed caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `-k` entry without a `=` separator.
    #[error("expected KEY=VALUE, got {0:?} (missing '=')")]
    MissingSeparator(String),

    /// A `-k` entry whose key part is empty (`=value`).
    #[error("expected KEY=VALUE, got {0:?} (empty key)")]
    EmptyKey(String),

    /// A `-k` entry containing more than one `=`, so the key/value split is ambiguous.
    #[error("expected KEY=VALUE, got {0:?} (more than one '=')")]
    AmbiguousSeparator(String),

    /// The `-d` argument is not valid JSON.
    #[error("invalid JSON data: {0}")]
    InvalidJson(String),

    /// The `-d` argument is valid JSON but not an object.
    #[error("JSON data must be an object, got {0}")]
    NotAnObject(&'static str),

    /// A timestamp string that is not RFC 3339.
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
}

/// Failure of an outbound call to the echo service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request could not be sent or the connection failed.
    #[error("request to {endpoint} failed: {reason}")]
    Connect { endpoint: String, reason: String },

    /// No response arrived within the configured timeout.
    #[error("request to {endpoint} timed out after {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u64 },

    /// The service answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body was not a JSON object.
    #[error("failed to decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl NetworkError {
    /// The endpoint the failed call was addressed to, if one was reached.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Connect { endpoint, .. }
            | Self::Timeout { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(endpoint),
            Self::Client(_) => None,
        }
    }

    /// HTTP status code for `Status` errors.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A well-formed value that failed a semantic check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
