//! Failure-injection decision logic.
//!
//! # Responsibilities
//! - Validate the untrusted failure-mode parameter (unrecognized → `none`)
//! - Reject non-GET methods with 405 before any mode branching
//! - Enact the selected mode with its timing and status behavior
//! - Emit exactly one structured log entry per request
//!
//! # Design Decisions
//! - The `timeout` mode still answers 200 after its delay; the responder is
//!   deliberately unaware of whether the client already gave up, and its
//!   entry records its own completion
//! - Fire-once: no retries, no local recovery of injected failures

use std::time::Duration;

use serde_json::{json, Value};
use tokio::time::Instant;

use crate::catalog::{self, Product};
use crate::config::ResponderConfig;
use crate::failure::{ErrorCode, FailureMode};
use crate::observability::{logging, LogEntry, StatusOrReason};

const ENDPOINT: &str = "/api/products";

/// What the responder decided to send, plus its own view of the request.
#[derive(Debug, Clone)]
pub struct InjectedResponse {
    pub status: u16,
    pub body: Value,
    pub entry: LogEntry,
}

/// The failure-injecting responder.
pub struct Responder {
    config: ResponderConfig,
    products: Vec<Product>,
    products_body: Value,
}

impl Responder {
    pub fn new(config: ResponderConfig) -> Self {
        let products = catalog::fixture();
        // Serialized once so repeated happy-path responses are byte-identical.
        let products_body =
            serde_json::to_value(&products).expect("product fixture serializes to JSON");
        Self {
            config,
            products,
            products_body,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Answer one request.
    ///
    /// `failure_param` is the raw, untrusted query parameter value. Exactly
    /// one log entry is emitted per call; it is also returned to the caller.
    pub async fn handle(&self, method: &str, failure_param: Option<&str>) -> InjectedResponse {
        let started = Instant::now();

        if method != "GET" {
            let response = self.method_not_allowed(method, started);
            logging::emit(&response.entry);
            return response;
        }

        let mode = FailureMode::from_param(failure_param);
        tracing::info!(
            endpoint = ENDPOINT,
            mode = %mode,
            "incoming request"
        );

        let response = match mode {
            FailureMode::None => self.happy_path(started).await,
            FailureMode::ServiceUnavailable => self.service_unavailable(started).await,
            FailureMode::Timeout => self.delayed_success(started).await,
        };
        logging::emit(&response.entry);
        response
    }

    fn method_not_allowed(&self, method: &str, started: Instant) -> InjectedResponse {
        let message = format!("Method {method} not allowed; only GET is supported");
        let entry = LogEntry::failure(
            ENDPOINT,
            method,
            elapsed_ms(started),
            StatusOrReason::Status(405),
            ErrorCode::MethodNotAllowed,
            message.clone(),
        );
        InjectedResponse {
            status: 405,
            body: json!({
                "error": "Method Not Allowed",
                "message": message,
                "code": ErrorCode::MethodNotAllowed,
            }),
            entry,
        }
    }

    async fn happy_path(&self, started: Instant) -> InjectedResponse {
        self.simulated_latency().await;
        let entry = LogEntry::success(
            ENDPOINT,
            "GET",
            elapsed_ms(started),
            200,
            "Products retrieved successfully",
        );
        InjectedResponse {
            status: 200,
            body: self.products_body.clone(),
            entry,
        }
    }

    async fn service_unavailable(&self, started: Instant) -> InjectedResponse {
        self.simulated_latency().await;
        let entry = LogEntry::failure(
            ENDPOINT,
            "GET",
            elapsed_ms(started),
            StatusOrReason::Status(503),
            ErrorCode::Net503,
            "Server is temporarily unable to handle the request",
        );
        InjectedResponse {
            status: 503,
            body: json!({
                "error": "Service Unavailable",
                "message": "The server is temporarily unable to handle your request. \
                            Please try again later.",
                "code": ErrorCode::Net503,
                "retryAfter": self.config.retry_after_secs,
            }),
            entry,
        }
    }

    /// The `timeout` mode: sleep past the client budget, then answer 200
    /// anyway. Whether anyone is still listening is not this side's concern.
    async fn delayed_success(&self, started: Instant) -> InjectedResponse {
        let delay = Duration::from_millis(self.config.timeout_delay_ms);
        tracing::info!(
            delay_ms = self.config.timeout_delay_ms,
            "injecting timeout delay"
        );
        tokio::time::sleep(delay).await;

        let entry = LogEntry::success(
            ENDPOINT,
            "GET",
            elapsed_ms(started),
            200,
            format!(
                "Products returned after injected delay of {}ms",
                self.config.timeout_delay_ms
            ),
        );
        InjectedResponse {
            status: 200,
            body: self.products_body.clone(),
            entry,
        }
    }

    /// Short jittered delay so the happy path and the 503 feel like a network.
    async fn simulated_latency(&self) {
        let ms = fastrand::u64(self.config.base_delay_min_ms..=self.config.base_delay_max_ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
