//! Configuration validation.
//!
//! Serde handles syntax; this module checks values: addresses parse,
//! timeouts and limits are non-zero, the API base URL is absolute.
//! Every problem is reported, not just the first.

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::CatalogConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.base_url `{value}` is not an absolute http(s) URL")]
    InvalidBaseUrl { value: String },

    #[error("{field} `{value}` is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &CatalogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::InvalidBaseUrl {
            value: config.api.base_url.clone(),
        }),
    }

    if config.api.timeout_secs == Some(0) {
        errors.push(ValidationError::Zero {
            field: "api.timeout_secs",
        });
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "server.request_timeout_secs",
        });
    }

    if config.server.max_body_size == 0 {
        errors.push(ValidationError::Zero {
            field: "server.max_body_size",
        });
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: observability.metrics_address.clone(),
        });
    }

    if !LOG_LEVELS.contains(&observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
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
        assert!(validate_config(&CatalogConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_problem() {
        let mut config = CatalogConfig::default();
        config.api.base_url = "localhost:5000/api".into();
        config.api.timeout_secs = Some(0);
        config.server.bind_address = "not an address".into();
        config.server.max_body_size = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::Zero {
            field: "server.max_body_size"
        }));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".into())));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = CatalogConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidAddress {
                field: "observability.metrics_address",
                value: "nowhere".into(),
            }]
        );
    }
}
