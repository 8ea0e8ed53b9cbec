//! The timeout-bounded requester.
//!
//! # Responsibilities
//! - Start a per-call [`RequestRecord`]
//! - Race the transport against the configured budget
//! - Classify the outcome into exactly one taxonomy variant
//! - Emit the resulting log entry
//!
//! # Design Decisions
//! - `tokio::time::timeout` owns the race: when the timer fires first the
//!   in-flight future is dropped, so the late response (the responder may
//!   still be sleeping out its injected delay) is discarded without any
//!   state mutation
//! - No retries: a single failed attempt surfaces immediately

use std::time::Duration;

use crate::catalog::Product;
use crate::config::RequesterConfig;
use crate::failure::FailureMode;
use crate::observability::logging;
use crate::requester::outcome::{FetchError, FetchSuccess};
use crate::requester::record::RequestRecord;
use crate::requester::transport::{Transport, TransportError};

const ENDPOINT: &str = "/api/products";

/// Issues budget-bounded fetches against a responder.
pub struct Requester {
    transport: Transport,
    budget: Duration,
}

impl Requester {
    pub fn new(transport: Transport, budget: Duration) -> Self {
        Self { transport, budget }
    }

    /// Build a real-HTTP requester from configuration.
    pub fn from_config(config: &RequesterConfig) -> Result<Self, TransportError> {
        Ok(Self::new(
            Transport::http(config.base_url.clone())?,
            Duration::from_millis(config.budget_ms),
        ))
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Fetch the product listing, abandoning the call once the budget is
    /// spent. Exactly one log entry is emitted per attempt; it is also
    /// embedded in the returned outcome.
    pub async fn fetch_with_budget(
        &self,
        mode: FailureMode,
    ) -> Result<FetchSuccess, FetchError> {
        let record = RequestRecord::start(ENDPOINT, mode);
        tracing::debug!(
            request_id = %record.id(),
            mode = %record.mode(),
            budget_ms = self.budget.as_millis() as u64,
            "issuing request"
        );

        let raced = tokio::time::timeout(self.budget, self.transport.fetch(mode)).await;

        let outcome = match raced {
            // Timer won: the transport future is already dropped.
            Err(_elapsed) => Err(FetchError::Timeout {
                budget_ms: self.budget.as_millis() as u64,
                entry: record.into_timeout_entry(self.budget),
            }),
            Ok(Err(error)) => Err(FetchError::Transport {
                class: error.class.clone(),
                entry: record.into_transport_entry(&error),
            }),
            Ok(Ok(raw)) if (200..300).contains(&raw.status) => {
                match serde_json::from_str::<Vec<Product>>(&raw.body) {
                    Ok(products) => {
                        let entry = record.into_success_entry(raw.status, products.len());
                        Ok(FetchSuccess { products, entry })
                    }
                    Err(error) => {
                        let detail = format!("undecodable product payload: {error}");
                        Err(FetchError::Unknown {
                            entry: record.into_unknown_entry(&detail),
                            detail,
                        })
                    }
                }
            }
            Ok(Ok(raw)) => Err(FetchError::Http {
                status: raw.status,
                entry: record.into_http_failure_entry(raw.status),
            }),
        };

        match &outcome {
            Ok(success) => logging::emit(&success.entry),
            Err(error) => logging::emit(error.entry()),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponderConfig;
    use crate::failure::ErrorCode;
    use crate::observability::StatusOrReason;
    use crate::responder::Responder;
    use std::sync::Arc;

    // Production timing values run under the paused clock, so these are
    // deterministic and instant.
    fn in_process_requester() -> Requester {
        let responder = Arc::new(Responder::new(ResponderConfig::default()));
        Requester::new(Transport::in_process(responder), Duration::from_millis(3_000))
    }

    #[tokio::test(start_paused = true)]
    async fn test_happy_path_returns_full_catalog() {
        let success = in_process_requester()
            .fetch_with_budget(FailureMode::None)
            .await
            .unwrap();
        assert_eq!(success.products.len(), 12);
        assert!(success.entry.is_success());
        assert_eq!(success.entry.status_or_reason, StatusOrReason::Status(200));
        assert!((100..=200).contains(&success.entry.latency_ms));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_mode_fails_at_exactly_the_budget() {
        let err = in_process_requester()
            .fetch_with_budget(FailureMode::Timeout)
            .await
            .unwrap_err();
        match &err {
            FetchError::Timeout { budget_ms, entry } => {
                assert_eq!(*budget_ms, 3_000);
                assert_eq!(entry.error_code, Some(ErrorCode::NetTimeout));
                assert_eq!(
                    entry.status_or_reason,
                    StatusOrReason::Reason("Request timeout".into())
                );
                assert!(entry.message.contains("3000ms"));
                // Latency lands on the budget, not the responder's delay.
                assert!((3_000..3_100).contains(&entry.latency_ms));
            }
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_503_mode_fails_fast_with_net_503() {
        let err = in_process_requester()
            .fetch_with_budget(FailureMode::ServiceUnavailable)
            .await
            .unwrap_err();
        match &err {
            FetchError::Http { status, entry } => {
                assert_eq!(*status, 503);
                assert_eq!(entry.error_code, Some(ErrorCode::Net503));
                // Injected delay (100-200ms), nowhere near the 3000ms budget.
                assert!(entry.latency_ms <= 200);
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_idempotent_success_entries_match_up_to_timing() {
        let requester = in_process_requester();
        let first = requester.fetch_with_budget(FailureMode::None).await.unwrap();
        let second = requester.fetch_with_budget(FailureMode::None).await.unwrap();
        assert_eq!(first.products, second.products);
        assert_eq!(first.entry.status_or_reason, second.entry.status_or_reason);
        assert_eq!(first.entry.error_code, second.entry.error_code);
        assert_eq!(first.entry.message, second.entry.message);
    }

    #[tokio::test(start_paused = true)]
    async fn test_budget_race_ignores_late_completion() {
        // Two sequential calls against the same responder: the first is
        // abandoned at the budget, the second must be a clean success with no
        // leftover state from the dropped attempt.
        let requester = in_process_requester();
        let err = requester
            .fetch_with_budget(FailureMode::Timeout)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::NetTimeout);

        let success = requester
            .fetch_with_budget(FailureMode::None)
            .await
            .unwrap();
        assert_eq!(success.products.len(), 12);
    }
}
