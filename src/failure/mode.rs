//! Caller-selected failure modes.
//!
//! # Design Decisions
//! - The query parameter is untrusted input; anything outside the closed set
//!   is treated as `none` rather than rejected
//! - Wire strings match the original demo protocol: `none`, `timeout`, `503`

use serde::{Deserialize, Serialize};

/// Simulation directive carried on each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailureMode {
    /// Happy path: short simulated latency, then 200 with the catalog.
    #[default]
    #[serde(rename = "none")]
    None,

    /// Delay the response beyond the requester's budget, then answer 200.
    #[serde(rename = "timeout")]
    Timeout,

    /// Answer 503 Service Unavailable after the short simulated latency.
    #[serde(rename = "503")]
    ServiceUnavailable,
}

impl FailureMode {
    /// Wire representation, also used as the `failure` query parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            FailureMode::None => "none",
            FailureMode::Timeout => "timeout",
            FailureMode::ServiceUnavailable => "503",
        }
    }

    /// Lenient parse of the raw query parameter.
    ///
    /// Absent or unrecognized values fall back to `None`; the responder never
    /// rejects a request over a bad mode string.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("timeout") => FailureMode::Timeout,
            Some("503") => FailureMode::ServiceUnavailable,
            _ => FailureMode::None,
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!(FailureMode::from_param(Some("none")), FailureMode::None);
        assert_eq!(FailureMode::from_param(Some("timeout")), FailureMode::Timeout);
        assert_eq!(
            FailureMode::from_param(Some("503")),
            FailureMode::ServiceUnavailable
        );
    }

    #[test]
    fn test_unrecognized_falls_back_to_none() {
        assert_eq!(FailureMode::from_param(None), FailureMode::None);
        assert_eq!(FailureMode::from_param(Some("")), FailureMode::None);
        assert_eq!(FailureMode::from_param(Some("chaos")), FailureMode::None);
        assert_eq!(FailureMode::from_param(Some("TIMEOUT")), FailureMode::None);
    }

    #[test]
    fn test_display_round_trip() {
        for mode in [
            FailureMode::None,
            FailureMode::Timeout,
            FailureMode::ServiceUnavailable,
        ] {
            assert_eq!(FailureMode::from_param(Some(mode.as_str())), mode);
        }
    }
}
