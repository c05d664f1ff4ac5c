//! REST client for the hosted data store.
//!
//! # Responsibilities
//! - POST insert records to `{url}/rest/v1/{table}`
//! - Authenticate with the service-role key (`apikey` + bearer headers)
//! - Decode the store's JSON error payload into a pass-through message
//!
//! # Design Decisions
//! - One `reqwest::Client` built at startup with the configured timeout;
//!   shared read-only afterwards
//! - `Prefer: return=minimal` — the gateway never reads inserted rows back
//! - Non-2xx responses become `StoreError::Rejected` with the store's own
//!   message; connection failures become `StoreError::Transport`

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::store::{ProfileStore, StoreError, StoreResult};

/// Production store client speaking the hosted REST API.
#[derive(Clone)]
pub struct RestStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl RestStore {
    /// Build a client from the store configuration.
    ///
    /// An empty URL or key is accepted; requests will then fail at the store,
    /// matching the platform behavior for unset secrets.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        if !config.url.is_empty() {
            url::Url::parse(&config.url)
                .map_err(|e| StoreError::InvalidUrl(format!("'{}': {}", config.url, e)))?;
        }

        tracing::info!(
            store_url = %config.url,
            table = %config.table,
            timeout_secs = config.request_timeout_secs,
            "Store client initialized"
        );

        Ok(Self { client, config })
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url.trim_end_matches('/'), table)
    }
}

#[async_trait]
impl ProfileStore for RestStore {
    async fn insert(&self, table: &str, record: &Value) -> StoreResult<()> {
        let response = self
            .client
            .post(self.endpoint(table))
            .header("apikey", &self.config.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.service_role_key),
            )
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body, status.as_u16());
        tracing::warn!(table = %table, status = status.as_u16(), message = %message, "Insert rejected by store");
        Err(StoreError::Rejected { message })
    }
}

impl std::fmt::Debug for RestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestStore")
            .field("url", &self.config.url)
            .field("table", &self.config.table)
            .field("timeout_secs", &self.config.request_timeout_secs)
            .finish()
    }
}

/// Pull the human-readable message out of a store error payload.
///
/// The REST API answers errors as `{"code": ..., "message": ..., ...}`.
/// Fall back to the raw body, then to the status code for empty bodies.
fn extract_error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        format!("store returned status {}", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> StoreConfig {
        StoreConfig {
            url: "https://example.supabase.co".to_string(),
            service_role_key: "service-key".to_string(),
            table: "profiles".to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_endpoint_construction() {
        let store = RestStore::new(test_config()).unwrap();
        assert_eq!(
            store.endpoint("profiles"),
            "https://example.supabase.co/rest/v1/profiles"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let mut config = test_config();
        config.url = "https://example.supabase.co/".to_string();
        let store = RestStore::new(config).unwrap();
        assert_eq!(
            store.endpoint("profiles"),
            "https://example.supabase.co/rest/v1/profiles"
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = test_config();
        config.url = "::not a url::".to_string();
        assert!(matches!(
            RestStore::new(config),
            Err(StoreError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_extract_error_message_from_payload() {
        let body = r#"{"code":"23505","message":"duplicate key value","details":null}"#;
        assert_eq!(extract_error_message(body, 409), "duplicate key value");
    }

    #[test]
    fn test_extract_error_message_fallbacks() {
        assert_eq!(extract_error_message("not json", 400), "not json");
        assert_eq!(extract_error_message("", 503), "store returned status 503");
        // JSON without a message field falls through to the raw body
        assert_eq!(extract_error_message(r#"{"code":1}"#, 400), r#"{"code":1}"#);
    }
}
