//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the font CSS proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream font API settings.
    pub upstream: UpstreamConfig,

    /// Response header policy.
    pub response: ResponseConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream font API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the font API.
    pub base_url: String,

    /// Path of the CSS endpoint on the font API.
    pub css_path: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fonts.googleapis.com".to_string(),
            css_path: "/css2".to_string(),
        }
    }
}

/// Response header policy for rewritten CSS.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// `Cache-Control` value sent with rewritten CSS.
    pub cache_control: String,

    /// Send `Access-Control-Allow-Origin: *` on every response.
    pub cors_allow_all: bool,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            cache_control: "max-age=86400, s-maxage=1, stale-while-revalidate".to_string(),
            cors_allow_all: true,
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upstream connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    /// Applies to both the client-facing request and the upstream fetch.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProxyConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.upstream.base_url, "https://fonts.googleapis.com");
        assert_eq!(config.upstream.css_path, "/css2");
        assert!(config.response.cors_allow_all);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [response]
            cache_control = "private, max-age=86400"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.response.cache_control, "private, max-age=86400");
        // Untouched sections fall back to defaults.
        assert_eq!(config.upstream.base_url, "https://fonts.googleapis.com");
        assert!(config.observability.metrics_enabled);
    }
}
