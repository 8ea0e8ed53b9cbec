//! Semantic configuration checks.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::LabConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("base_delay_min_ms ({min}) exceeds base_delay_max_ms ({max})")]
    DelayRange { min: u64, max: u64 },

    #[error("budget_ms must be non-zero")]
    ZeroBudget,

    #[error("timeout_delay_ms ({delay}) must exceed budget_ms ({budget})")]
    TimeoutWithinBudget { delay: u64, budget: u64 },
}

/// Validate a configuration, collecting every problem rather than stopping at
/// the first.
pub fn validate_config(config: &LabConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.responder.base_delay_min_ms > config.responder.base_delay_max_ms {
        errors.push(ValidationError::DelayRange {
            min: config.responder.base_delay_min_ms,
            max: config.responder.base_delay_max_ms,
        });
    }

    if config.requester.budget_ms == 0 {
        errors.push(ValidationError::ZeroBudget);
    }

    // The whole point of the timeout mode is that the client gives up first.
    if config.responder.timeout_delay_ms <= config.requester.budget_ms {
        errors.push(ValidationError::TimeoutWithinBudget {
            delay: config.responder.timeout_delay_ms,
            budget: config.requester.budget_ms,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&LabConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_delay_not_beyond_budget() {
        let mut config = LabConfig::default();
        config.responder.timeout_delay_ms = 2_000;
        config.requester.budget_ms = 3_000;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::TimeoutWithinBudget {
            delay: 2_000,
            budget: 3_000
        }));
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let mut config = LabConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::BindAddress(_))));
    }

    #[test]
    fn test_collects_multiple_errors() {
        let mut config = LabConfig::default();
        config.requester.budget_ms = 0;
        config.responder.base_delay_min_ms = 300;
        config.responder.base_delay_max_ms = 100;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
