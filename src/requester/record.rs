//! Per-call request bookkeeping.
//!
//! One [`RequestRecord`] is created at the start of each fetch and consumed
//! when the outcome is classified. Ownership is explicit so concurrent calls
//! can never interfere through shared start-time state.

use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use crate::failure::{ErrorCode, FailureMode};
use crate::observability::{LogEntry, StatusOrReason};
use crate::requester::TransportError;

/// Ephemeral record for one request attempt.
#[derive(Debug)]
pub struct RequestRecord {
    id: Uuid,
    started: Instant,
    endpoint: String,
    method: &'static str,
    mode: FailureMode,
}

impl RequestRecord {
    /// Start the clock for one attempt. The method is always a read-only GET.
    pub fn start(endpoint: impl Into<String>, mode: FailureMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            started: Instant::now(),
            endpoint: endpoint.into(),
            method: "GET",
            mode,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> FailureMode {
        self.mode
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    // The entry builders consume the record: a record is used for exactly one
    // completion and never reused.

    pub fn into_success_entry(self, status: u16, product_count: usize) -> LogEntry {
        LogEntry::success(
            self.endpoint,
            self.method,
            self.started.elapsed().as_millis() as u64,
            status,
            format!("Products loaded successfully ({product_count} items)"),
        )
    }

    pub fn into_http_failure_entry(self, status: u16) -> LogEntry {
        LogEntry::failure(
            self.endpoint,
            self.method,
            self.started.elapsed().as_millis() as u64,
            StatusOrReason::Status(status),
            ErrorCode::from_status(status),
            format!("Network failure: HTTP status {status}"),
        )
    }

    pub fn into_timeout_entry(self, budget: Duration) -> LogEntry {
        LogEntry::failure(
            self.endpoint,
            self.method,
            self.started.elapsed().as_millis() as u64,
            StatusOrReason::Reason("Request timeout".to_string()),
            ErrorCode::NetTimeout,
            format!(
                "Network failure: request timed out (exceeded {}ms)",
                budget.as_millis()
            ),
        )
    }

    pub fn into_transport_entry(self, error: &TransportError) -> LogEntry {
        LogEntry::failure(
            self.endpoint,
            self.method,
            self.started.elapsed().as_millis() as u64,
            StatusOrReason::Reason(error.detail.clone()),
            ErrorCode::NetConnectionError,
            format!("Network failure: {}: {}", error.class, error.detail),
        )
    }

    pub fn into_unknown_entry(self, detail: &str) -> LogEntry {
        LogEntry::failure(
            self.endpoint,
            self.method,
            self.started.elapsed().as_millis() as u64,
            StatusOrReason::Reason("Unexpected error".to_string()),
            ErrorCode::UnknownError,
            detail.to_string(),
        )
    }
}
