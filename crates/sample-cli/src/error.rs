//! Command-level errors and their exit codes.
//!
//! Every failure is caught at the command boundary, turned into an `error`
//! [`ApiResponse`] and rendered on stderr. The process exit code alone is
//! enough to detect failure.

use sample_client::ConfigError;
use sample_core::{ApiResponse, NetworkError, ParseError};
use serde_json::{Map, Value};

/// Exit code for malformed command input.
pub const EXIT_PARSE: u8 = 2;
/// Exit code for a failed outbound call.
pub const EXIT_NETWORK: u8 = 3;
/// Exit code for invalid client configuration.
pub const EXIT_CONFIG: u8 = 4;
/// Exit code when a termination signal abandons an in-flight call.
pub const EXIT_INTERRUPTED: u8 = 130;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("interrupted before the request completed")]
    Interrupted,
}

impl CommandError {
    /// Stable machine-readable category, reported as `data.kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Network(_) => "network",
            Self::Config(_) => "config",
            Self::Interrupted => "interrupted",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) => EXIT_PARSE,
            Self::Network(_) => EXIT_NETWORK,
            Self::Config(_) => EXIT_CONFIG,
            Self::Interrupted => EXIT_INTERRUPTED,
        }
    }

    /// Error envelope carrying the failure details in `data`.
    pub fn to_response(&self) -> ApiResponse {
        let mut details = Map::new();
        details.insert("kind".into(), Value::from(self.kind()));
        details.insert("exit_code".into(), Value::from(self.exit_code()));

        let detail = match self {
            Self::Parse(e) => e.to_string(),
            Self::Network(e) => {
                if let Some(endpoint) = e.endpoint() {
                    details.insert("endpoint".into(), Value::from(endpoint));
                }
                if let Some(status) = e.http_status() {
                    details.insert("http_status".into(), Value::from(status));
                }
                e.to_string()
            }
            Self::Config(e) => e.to_string(),
            Self::Interrupted => "received termination signal".to_string(),
        };
        details.insert("detail".into(), Value::from(detail));

        ApiResponse::error(self.to_string(), details)
    }
}
