//! Lifecycle management.
//!
//! Startup order: config → logging → listener → server. Shutdown is a
//! broadcast: Ctrl-C (or a test) triggers it, the server drains and exits.

pub mod shutdown;

pub use shutdown::Shutdown;
