//! Transport abstraction for the two outbound echo-service calls.
//!
//! [`SampleService`](crate::SampleService) only talks to a [`Transport`], so
//! tests can substitute an in-memory implementation without opening sockets.
//! [`HttpTransport`] is the production implementation backed by `reqwest`.
//!
//! No retries happen at this layer. A failed call is reported once and the
//! caller decides what to do with it.

use std::time::Duration;

use async_trait::async_trait;
use sample_core::NetworkError;
use serde_json::Value;
use url::Url;

use crate::config::EchoApiConfig;

/// Capability to `GET` and `POST` JSON documents.
///
/// Implementations must be `Send + Sync` so a service can be shared behind an
/// `Arc` across tasks.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Fetch `url` and decode the body as JSON.
    async fn get(&self, url: &Url) -> Result<Value, NetworkError>;

    /// Post `body` as JSON to `url` and decode the response body as JSON.
    async fn post(&self, url: &Url, body: &Value) -> Result<Value, NetworkError>;
}

/// `reqwest`-backed transport with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Build the HTTP client from configuration.
    pub fn new(config: &EchoApiConfig) -> Result<Self, NetworkError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| NetworkError::Client(e.to_string()))?;
        Ok(Self { http, timeout })
    }

    /// Send a request and decode a 2xx JSON body, mapping every failure to
    /// a [`NetworkError`] tagged with `endpoint`.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: String,
    ) -> Result<Value, NetworkError> {
        tracing::debug!(%endpoint, "sending echo service request");

        let resp = request
            .send()
            .await
            .map_err(|e| self.transport_error(&endpoint, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(%endpoint, status = status.as_u16(), "echo service returned an error status");
            return Err(NetworkError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| self.transport_error(&endpoint, e))?;
        serde_json::from_slice(&bytes).map_err(|e| NetworkError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }

    fn transport_error(&self, endpoint: &str, err: reqwest::Error) -> NetworkError {
        tracing::debug!(%endpoint, "echo service request failed: {err}");
        if err.is_timeout() {
            NetworkError::Timeout {
                endpoint: endpoint.to_string(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            NetworkError::Connect {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Value, NetworkError> {
        self.send(self.http.get(url.clone()), format!("GET {url}"))
            .await
    }

    async fn post(&self, url: &Url, body: &Value) -> Result<Value, NetworkError> {
        self.send(self.http.post(url.clone()).json(body), format!("POST {url}"))
            .await
    }
}
