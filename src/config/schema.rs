//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the catalog
//! server and the command-line client. All types derive Serde traits for
//! deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Where the client finds the product API.
    pub api: ApiConfig,

    /// Product API server settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Client-side API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base address of the product API (e.g., "http://localhost:5000").
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means requests may hang
    /// indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: None,
        }
    }
}

/// Product API server settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:5000").
    pub bind_address: String,

    /// JSON file the product store is loaded from and saved to.
    pub data_file: Option<String>,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            data_file: None,
            request_timeout_secs: 30,
            max_body_size: 64 * 1024,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for terminals.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.server.bind_address, "127.0.0.1:5000");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config: CatalogConfig = toml::from_str(
            r#"
            [api]
            timeout_secs = 5

            [server]
            data_file = "products.json"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, Some(5));
        assert_eq!(config.server.data_file.as_deref(), Some("products.json"));
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }
}
