//! Structured request logging.
//!
//! # Data Flow
//! ```text
//! responder / requester
//!     → entry.rs (build a LogEntry at request completion)
//!     → logging.rs (emit through the tracing sink)
//!     → caller (entry also returned for display)
//! ```
//!
//! Each side builds and owns its own entry; the two views of one request may
//! legitimately disagree (the responder can report a 200 it sent after the
//! requester already logged a timeout).

pub mod entry;
pub mod logging;

pub use entry::{LogEntry, StatusOrReason};
