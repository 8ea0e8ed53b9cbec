//! Failure-injecting responder subsystem.
//!
//! # Data Flow
//! ```text
//! request (method + failure query param)
//!     → core.rs (validate mode, sleep, pick status/body, build entry)
//!     → server.rs (axum surface: /api/products, /health, 404 fallback)
//! ```
//!
//! The core is transport-agnostic: the axum server and the requester's
//! in-process transport both drive the same [`Responder`].

pub mod core;
pub mod server;

pub use core::{InjectedResponse, Responder};
pub use server::HttpServer;
