//! Fault Lab: a failure-injection teaching demo.
//!
//! Two roles around a trivial product-listing endpoint:
//! - the **responder** serves `GET /api/products` and enacts a caller-selected
//!   failure mode (slow response, 503, or the happy path),
//! - the **requester** fetches the listing under a wall-clock budget and
//!   classifies every outcome into a closed set of structured log entries.

pub mod catalog;
pub mod config;
pub mod failure;
pub mod lifecycle;
pub mod observability;
pub mod requester;
pub mod responder;

pub use config::LabConfig;
pub use failure::{ErrorCode, FailureMode};
pub use lifecycle::Shutdown;
pub use observability::LogEntry;
pub use requester::Requester;
pub use responder::HttpServer;
