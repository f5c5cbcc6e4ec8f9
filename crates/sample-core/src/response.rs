//! The `ApiResponse` envelope returned by data processing and used to report
//! command failures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::temporal::Timestamp;

/// Outcome recorded in an [`ApiResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured response envelope.
///
/// `success` responses carry the computed payload in `data`; `error`
/// responses carry the failure details. Fields are private so the status and
/// payload can only be paired through [`ApiResponse::success`] and
/// [`ApiResponse::error`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    status: ResponseStatus,
    message: String,
    #[serde(default)]
    data: Map<String, Value>,
    timestamp: Timestamp,
}

impl ApiResponse {
    /// Build a success response stamped with the current time.
    pub fn success(message: impl Into<String>, data: Map<String, Value>) -> Self {
        Self::with_timestamp(ResponseStatus::Success, message, data, Timestamp::now())
    }

    /// Build an error response stamped with the current time.
    pub fn error(message: impl Into<String>, details: Map<String, Value>) -> Self {
        Self::with_timestamp(ResponseStatus::Error, message, details, Timestamp::now())
    }

    pub fn with_timestamp(
        status: ResponseStatus,
        message: impl Into<String>,
        data: Map<String, Value>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            data,
            timestamp,
        }
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
