//! The closed set of machine-readable error codes.
//!
//! Both sides of the wire agree on these exact strings. New codes must be
//! added here explicitly; nothing in the system invents one at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Symbolic error code attached to failure log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Client-side budget expired before the response arrived.
    NetTimeout,
    /// Server answered 503 Service Unavailable.
    Net503,
    /// Transport-level failure (DNS, connection refused, reset, ...).
    NetConnectionError,
    /// Any other HTTP error status, encoded as `NET_<status>`.
    ///
    /// Never holds 503; [`ErrorCode::from_status`] canonicalizes that case.
    Http(u16),
    /// Request used a method other than GET.
    MethodNotAllowed,
    /// Unexpected failure coerced into the closed set, message preserved.
    UnknownError,
}

impl ErrorCode {
    /// Map a non-2xx HTTP status to its code.
    pub fn from_status(status: u16) -> Self {
        if status == 503 {
            ErrorCode::Net503
        } else {
            ErrorCode::Http(status)
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::NetTimeout => f.write_str("NET_TIMEOUT"),
            ErrorCode::Net503 => f.write_str("NET_503"),
            ErrorCode::NetConnectionError => f.write_str("NET_CONNECTION_ERROR"),
            ErrorCode::Http(status) => write!(f, "NET_{status}"),
            ErrorCode::MethodNotAllowed => f.write_str("METHOD_NOT_ALLOWED"),
            ErrorCode::UnknownError => f.write_str("UNKNOWN_ERROR"),
        }
    }
}

/// Error for strings outside the closed code set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NET_TIMEOUT" => Ok(ErrorCode::NetTimeout),
            "NET_503" => Ok(ErrorCode::Net503),
            "NET_CONNECTION_ERROR" => Ok(ErrorCode::NetConnectionError),
            "METHOD_NOT_ALLOWED" => Ok(ErrorCode::MethodNotAllowed),
            "UNKNOWN_ERROR" => Ok(ErrorCode::UnknownError),
            other => other
                .strip_prefix("NET_")
                .and_then(|digits| digits.parse::<u16>().ok())
                .map(ErrorCode::Http)
                .ok_or_else(|| UnknownErrorCode(other.to_string())),
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
