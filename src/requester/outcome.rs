//! The requester's outcome taxonomy.
//!
//! One tagged variant per failure class, inspected by the caller via pattern
//! matching. Every variant carries the structured log entry it produced.

use thiserror::Error;

use crate::catalog::Product;
use crate::failure::ErrorCode;
use crate::observability::LogEntry;

/// A completed fetch: the decoded catalog plus the success entry.
#[derive(Debug, Clone)]
pub struct FetchSuccess {
    pub products: Vec<Product>,
    pub entry: LogEntry,
}

/// Terminal failure of one fetch attempt. Never retried internally; the
/// caller decides whether to re-invoke.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The budget timer fired before the transport completed.
    #[error("request timed out after {budget_ms}ms")]
    Timeout { budget_ms: u64, entry: LogEntry },

    /// The server answered with a non-2xx status.
    #[error("server answered HTTP {status}")]
    Http { status: u16, entry: LogEntry },

    /// The transport failed before any response (DNS, refused, reset, ...).
    #[error("transport failure: {class}")]
    Transport { class: String, entry: LogEntry },

    /// Anything unexpected, coerced into the closed code set.
    #[error("unexpected failure: {detail}")]
    Unknown { detail: String, entry: LogEntry },
}

impl FetchError {
    /// The structured entry describing this failure.
    pub fn entry(&self) -> &LogEntry {
        match self {
            FetchError::Timeout { entry, .. }
            | FetchError::Http { entry, .. }
            | FetchError::Transport { entry, .. }
            | FetchError::Unknown { entry, .. } => entry,
        }
    }

    /// Consume the error, keeping only the entry (what a UI would display).
    pub fn into_entry(self) -> LogEntry {
        match self {
            FetchError::Timeout { entry, .. }
            | FetchError::Http { entry, .. }
            | FetchError::Transport { entry, .. }
            | FetchError::Unknown { entry, .. } => entry,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            FetchError::Timeout { .. } => ErrorCode::NetTimeout,
            FetchError::Http { status, .. } => ErrorCode::from_status(*status),
            FetchError::Transport { .. } => ErrorCode::NetConnectionError,
            FetchError::Unknown { .. } => ErrorCode::UnknownError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::StatusOrReason;

    fn entry_for(code: ErrorCode) -> LogEntry {
        LogEntry::failure(
            "/api/products",
            "GET",
            1,
            StatusOrReason::Reason("test".into()),
            code,
            "test",
        )
    }

    #[test]
    fn test_error_code_matches_variant() {
        let err = FetchError::Timeout {
            budget_ms: 3_000,
            entry: entry_for(ErrorCode::NetTimeout),
        };
        assert_eq!(err.error_code(), ErrorCode::NetTimeout);

        let err = FetchError::Http {
            status: 503,
            entry: entry_for(ErrorCode::Net503),
        };
        assert_eq!(err.error_code(), ErrorCode::Net503);

        let err = FetchError::Http {
            status: 418,
            entry: entry_for(ErrorCode::Http(418)),
        };
        assert_eq!(err.error_code(), ErrorCode::Http(418));
    }

    #[test]
    fn test_display_is_human_readable() {
        let err = FetchError::Timeout {
            budget_ms: 3_000,
            entry: entry_for(ErrorCode::NetTimeout),
        };
        assert_eq!(err.to_string(), "request timed out after 3000ms");
    }
}
