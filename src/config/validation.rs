//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses parse and the upstream URL is usable
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug)]
pub enum ValidationError {
    /// Listener bind address does not parse as a socket address.
    InvalidBindAddress(String),
    /// Upstream base URL does not parse, or has a non-HTTP scheme.
    InvalidUpstreamUrl { url: String, reason: String },
    /// Upstream CSS path must be absolute.
    InvalidCssPath(String),
    /// A timeout is configured as zero.
    ZeroTimeout(&'static str),
    /// Metrics are enabled but the address does not parse.
    InvalidMetricsAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvalidUpstreamUrl { url, reason } => {
                write!(f, "invalid upstream base URL '{}': {}", url, reason)
            }
            ValidationError::InvalidCssPath(path) => {
                write!(f, "upstream CSS path '{}' must start with '/'", path)
            }
            ValidationError::ZeroTimeout(name) => {
                write!(f, "timeout '{}' must be greater than zero", name)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "invalid metrics address '{}'", addr)
            }
        }
    }
}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.upstream.base_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if !config.upstream.css_path.starts_with('/') {
        errors.push(ValidationError::InvalidCssPath(config.upstream.css_path.clone()));
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.upstream.base_url = "ftp://fonts.example".to_string();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_relative_css_path_rejected() {
        let mut config = ProxyConfig::default();
        config.upstream.css_path = "css2".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidCssPath(_)));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ProxyConfig::default();
        config.observability.metrics_address = "bogus".to_string();
        assert!(validate_config(&config).is_err());

        config.observability.metrics_enabled = false;
        assert!(validate_config(&config).is_ok());
    }
}
