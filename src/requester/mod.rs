//! Timeout-bounded requester subsystem.
//!
//! # Data Flow
//! ```text
//! caller picks a FailureMode
//!     → client.rs (start RequestRecord, race transport vs budget timer)
//!     → transport.rs (real HTTP via reqwest, or the in-process responder)
//!     → outcome.rs (one tagged variant per failure taxonomy entry)
//!     → caller (products, or a structured log entry to display)
//! ```

pub mod client;
pub mod outcome;
pub mod record;
pub mod transport;

pub use client::Requester;
pub use outcome::{FetchError, FetchSuccess};
pub use record::RequestRecord;
pub use transport::{Transport, TransportError};
