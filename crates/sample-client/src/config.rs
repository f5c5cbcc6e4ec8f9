//! Echo service client configuration.
//!
//! Defaults point to the public `httpbin.org` service. Override via
//! environment variables, CLI flags, or explicit construction for tests.

use sample_core::ValidationError;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://httpbin.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the echo service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoApiConfig {
    /// Base URL; endpoint paths (`ip`, `post`) are resolved beneath it.
    pub base_url: Url,
    /// Per-request timeout in seconds. Applies to both outbound calls.
    pub timeout_secs: u64,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl EchoApiConfig {
    /// Configuration for `base_url` with the default timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SAMPLE_ECHO_URL` (default: `https://httpbin.org`)
    /// - `SAMPLE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_url("SAMPLE_ECHO_URL", DEFAULT_BASE_URL)?;
        let timeout_secs = match std::env::var("SAMPLE_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout("SAMPLE_TIMEOUT_SECS", &raw)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let config = Self {
            timeout_secs,
            ..Self::new(base_url)
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration pointing at a local mock server (for testing).
    pub fn local_mock(uri: &str) -> Result<Self, ConfigError> {
        let base_url =
            Url::parse(uri).map_err(|e| ConfigError::InvalidUrl(uri.to_string(), e.to_string()))?;
        Ok(Self {
            timeout_secs: 5,
            ..Self::new(base_url)
        })
    }

    /// Replace the base URL with a caller-supplied one (e.g. `--base-url`).
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url =
            Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
        self.validate()?;
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Result<Self, ConfigError> {
        self.timeout_secs = timeout_secs;
        self.validate()?;
        Ok(self)
    }

    /// Reject a zero timeout and non-HTTP base URLs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::new("timeout_secs", "must be greater than zero"));
        }
        match self.base_url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ValidationError::new(
                "base_url",
                format!("unsupported scheme {other:?}, expected http or https"),
            )),
        }
    }
}

fn default_user_agent() -> String {
    format!("sample-a/{}", env!("CARGO_PKG_VERSION"))
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn parse_timeout(var: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(var.to_string(), raw.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout for {0}: {1:?} is not a whole number of seconds")]
    InvalidTimeout(String, String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
