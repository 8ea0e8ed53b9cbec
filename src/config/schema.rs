//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every section defaults to the documented demo values.

use serde::{Deserialize, Serialize};

/// Root configuration for the demo.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LabConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Failure-injection timing on the server side.
    pub responder: ResponderConfig,

    /// Client-side budget and target.
    pub requester: RequesterConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Timing knobs for the failure-injecting responder.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Lower bound of the simulated-latency interval in milliseconds.
    pub base_delay_min_ms: u64,

    /// Upper bound of the simulated-latency interval in milliseconds.
    pub base_delay_max_ms: u64,

    /// Injected delay for the `timeout` mode, in milliseconds.
    ///
    /// Must exceed the requester budget so the client always gives up first.
    pub timeout_delay_ms: u64,

    /// `retryAfter` value advertised in the 503 error body, in seconds.
    pub retry_after_secs: u64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            base_delay_min_ms: 100,
            base_delay_max_ms: 200,
            timeout_delay_ms: 5_000,
            retry_after_secs: 60,
        }
    }
}

/// Client-side configuration for the timeout-bounded requester.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RequesterConfig {
    /// Maximum wall-clock time to wait for a response, in milliseconds.
    pub budget_ms: u64,

    /// Base URL of the responder.
    pub base_url: String,
}

impl Default for RequesterConfig {
    fn default() -> Self {
        Self {
            budget_ms: 3_000,
            base_url: "http://127.0.0.1:3000".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pair_delay_beyond_budget() {
        let config = LabConfig::default();
        assert!(config.responder.timeout_delay_ms > config.requester.budget_ms);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: LabConfig = toml::from_str("").unwrap();
        assert_eq!(config.requester.budget_ms, 3_000);
        assert_eq!(config.responder.timeout_delay_ms, 5_000);
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: LabConfig = toml::from_str(
            r#"
            [requester]
            budget_ms = 4000
            "#,
        )
        .unwrap();
        assert_eq!(config.requester.budget_ms, 4_000);
        assert_eq!(config.responder.base_delay_min_ms, 100);
    }
}
