//! The canonical structured record describing one request's outcome.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::failure::ErrorCode;

/// Either an HTTP status code or a symbolic reason string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusOrReason {
    Status(u16),
    Reason(String),
}

/// One request's outcome, as seen by whichever side built it.
///
/// Invariant: a success entry carries `error_code == None` and a failure entry
/// carries `Some(code)`; the constructors are the only way these are built, so
/// an entry is never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// RFC 3339 timestamp taken at completion.
    pub timestamp: String,
    /// Logical endpoint name, e.g. `/api/products`.
    pub endpoint: String,
    /// Request method, always a read-only fetch in this demo.
    pub method: String,
    /// Wall-clock milliseconds from request start to completion.
    pub latency_ms: u64,
    /// HTTP status or a symbolic reason such as `"Request timeout"`.
    pub status_or_reason: StatusOrReason,
    /// Machine-readable code from the closed set; `null` on success.
    pub error_code: Option<ErrorCode>,
    /// Human-readable description, distinct from the code.
    pub message: String,
}

impl LogEntry {
    /// Build a success entry (`error_code` stays empty).
    pub fn success(
        endpoint: impl Into<String>,
        method: impl Into<String>,
        latency_ms: u64,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: now_rfc3339(),
            endpoint: endpoint.into(),
            method: method.into(),
            latency_ms,
            status_or_reason: StatusOrReason::Status(status),
            error_code: None,
            message: message.into(),
        }
    }

    /// Build a failure entry carrying a code from the closed set.
    pub fn failure(
        endpoint: impl Into<String>,
        method: impl Into<String>,
        latency_ms: u64,
        status_or_reason: StatusOrReason,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: now_rfc3339(),
            endpoint: endpoint.into(),
            method: method.into(),
            latency_ms,
            status_or_reason,
            error_code: Some(code),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_code.is_none()
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
