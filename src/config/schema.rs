//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the profile gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Data-store connection settings.
    pub store: StoreConfig,

    /// CORS headers stamped on every response.
    pub cors: CorsConfig,

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

/// Data-store connection settings.
///
/// `url` and `service_role_key` default to empty strings. An empty value is
/// not a configuration error: insert calls simply fail against the store,
/// matching the hosted platform's behavior when its secrets are unset.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the hosted data store (e.g., "https://xyz.supabase.co").
    pub url: String,

    /// Privileged service-role key used for the insert.
    pub service_role_key: String,

    /// Table the profile rows are inserted into.
    pub table: String,

    /// Request timeout toward the store in seconds.
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_role_key: String::new(),
            table: "profiles".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// CORS response headers.
///
/// Defaults reproduce the shared CORS header set the original function used.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// `Access-Control-Allow-Origin` value.
    pub allow_origin: String,

    /// `Access-Control-Allow-Headers` value.
    pub allow_headers: String,

    /// `Access-Control-Allow-Methods` value.
    pub allow_methods: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_headers: "authorization, x-client-info, apikey, content-type".to_string(),
            allow_methods: "POST, OPTIONS".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
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
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_config() {
        let config = StoreConfig::default();
        assert!(config.url.is_empty());
        assert!(config.service_role_key.is_empty());
        assert_eq!(config.table, "profiles");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_default_cors_matches_shared_header_set() {
        let cors = CorsConfig::default();
        assert_eq!(cors.allow_origin, "*");
        assert!(cors.allow_headers.contains("authorization"));
        assert!(cors.allow_headers.contains("apikey"));
    }

    #[test]
    fn test_minimal_toml_roundtrip() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [store]
            url = "https://example.supabase.co"
            service_role_key = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.url, "https://example.supabase.co");
        assert_eq!(config.store.table, "profiles");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
