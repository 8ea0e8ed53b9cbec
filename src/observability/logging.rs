//! Logging subsystem.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the server binary
//! - Emit every [`LogEntry`] through the tracing sink
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level when set
//! - Entries are logged as single-line JSON so they stay grep-able

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::observability::LogEntry;

/// Initialize the global tracing subscriber.
///
/// `level` comes from `[observability] log_level` and is used as the fallback
/// filter when `RUST_LOG` is unset.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "fault_lab={level},tower_http={level}"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Emit one entry through the tracing sink.
///
/// Success entries log at `info`, failures at `error`, mirroring the
/// SUCCESS LOG / ERROR LOG split of the original console output.
pub fn emit(entry: &LogEntry) {
    let json = serde_json::to_string(entry).unwrap_or_else(|_| entry.message.clone());
    if entry.is_success() {
        tracing::info!(
            endpoint = %entry.endpoint,
            latency_ms = entry.latency_ms,
            entry = %json,
            "request completed"
        );
    } else {
        tracing::error!(
            endpoint = %entry.endpoint,
            latency_ms = entry.latency_ms,
            error_code = %entry.error_code.map(|c| c.to_string()).unwrap_or_default(),
            entry = %json,
            "request failed"
        );
    }
}
