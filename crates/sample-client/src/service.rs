//! The network half of the sample service.

use std::sync::Arc;

use sample_core::{json_kind, NetworkError};
use serde_json::{Map, Value};
use url::Url;

use crate::config::EchoApiConfig;
use crate::transport::{HttpTransport, Transport};

/// Path of the caller-identity endpoint, relative to the base URL.
pub const IP_PATH: &str = "ip";
/// Path of the echo endpoint, relative to the base URL.
pub const POST_PATH: &str = "post";

/// Owns the two outbound echo-service calls.
///
/// Holds no per-call state; clones share the same transport.
#[derive(Debug, Clone)]
pub struct SampleService {
    transport: Arc<dyn Transport>,
    base_url: Url,
}

impl SampleService {
    pub fn new(transport: Arc<dyn Transport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// Build a service over [`HttpTransport`] from configuration.
    pub fn from_config(config: &EchoApiConfig) -> Result<Self, NetworkError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), config.base_url.clone()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch caller IP metadata.
    ///
    /// Calls `GET {base_url}/ip` and returns the JSON object verbatim.
    pub async fn get_ip_info(&self) -> Result<Map<String, Value>, NetworkError> {
        let url = self.endpoint(IP_PATH)?;
        let body = self.transport.get(&url).await?;
        expect_object(&url, body)
    }

    /// Post `payload` to the echo endpoint.
    ///
    /// Calls `POST {base_url}/post` and returns the JSON object verbatim.
    pub async fn post_data(
        &self,
        payload: &Map<String, Value>,
    ) -> Result<Map<String, Value>, NetworkError> {
        let url = self.endpoint(POST_PATH)?;
        let body = self
            .transport
            .post(&url, &Value::Object(payload.clone()))
            .await?;
        expect_object(&url, body)
    }

    /// Resolve `path` beneath the base URL, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path)
            .map_err(|e| NetworkError::Client(format!("cannot resolve {path:?} against {base}: {e}")))
    }
}

fn expect_object(url: &Url, body: Value) -> Result<Map<String, Value>, NetworkError> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(NetworkError::Decode {
            endpoint: url.to_string(),
            reason: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}
