//! Transport selection for the requester.
//!
//! # Design Decisions
//! - One responder, two transports: a real HTTP client and an in-process
//!   variant that drives the responder directly, selected at construction
//! - The reqwest client carries no timeout of its own; the budget race in
//!   `client.rs` is the only timer governing a fetch

use std::sync::Arc;

use thiserror::Error;

use crate::failure::FailureMode;
use crate::responder::Responder;

/// A raw response before classification: status plus unparsed body text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Transport-level failure, before any HTTP status exists.
#[derive(Debug, Clone, Error)]
#[error("{class}: {detail}")]
pub struct TransportError {
    /// Symbolic failure class (`connect`, `request`, `decode`, ...).
    pub class: String,
    /// Underlying error message.
    pub detail: String,
}

impl TransportError {
    fn from_reqwest(error: &reqwest::Error) -> Self {
        let class = if error.is_timeout() {
            "timeout"
        } else if error.is_connect() {
            "connect"
        } else if error.is_redirect() {
            "redirect"
        } else if error.is_decode() {
            "decode"
        } else if error.is_request() {
            "request"
        } else {
            "transport"
        };
        Self {
            class: class.to_string(),
            detail: error.to_string(),
        }
    }
}

/// How the requester reaches a responder.
pub enum Transport {
    Http(HttpTransport),
    InProcess(InProcessTransport),
}

impl Transport {
    /// Real HTTP against a running server.
    pub fn http(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| TransportError {
                class: "client_build".to_string(),
                detail: e.to_string(),
            })?;
        Ok(Transport::Http(HttpTransport {
            client,
            base_url: base_url.into(),
        }))
    }

    /// In-process simulation driving the responder directly.
    pub fn in_process(responder: Arc<Responder>) -> Self {
        Transport::InProcess(InProcessTransport { responder })
    }

    pub(crate) async fn fetch(&self, mode: FailureMode) -> Result<RawResponse, TransportError> {
        match self {
            Transport::Http(t) => t.fetch(mode).await,
            Transport::InProcess(t) => Ok(t.fetch(mode).await),
        }
    }
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    async fn fetch(&self, mode: FailureMode) -> Result<RawResponse, TransportError> {
        // The parameter is only sent when a failure is actually requested.
        let url = match mode {
            FailureMode::None => format!("{}/api/products", self.base_url),
            _ => format!("{}/api/products?failure={}", self.base_url, mode),
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;
        Ok(RawResponse { status, body })
    }
}

/// Transport that calls the responder without a network. The responder's
/// tokio sleeps still run, so the budget race behaves exactly as over HTTP.
pub struct InProcessTransport {
    responder: Arc<Responder>,
}

impl InProcessTransport {
    async fn fetch(&self, mode: FailureMode) -> RawResponse {
        let injected = self.responder.handle("GET", Some(mode.as_str())).await;
        RawResponse {
            status: injected.status,
            body: injected.body.to_string(),
        }
    }
}
