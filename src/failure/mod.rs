//! Failure-simulation vocabulary shared by both sides of the wire.

pub mod code;
pub mod mode;

pub use code::ErrorCode;
pub use mode::FailureMode;
