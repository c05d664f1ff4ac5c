//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the store section is usable when a URL is given
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - An *empty* store URL is valid: inserts then fail at the store, which is
//!   the documented behavior for unset platform secrets

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "store.table").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".to_string(),
            message: format!("not a valid socket address: '{}'", config.listener.bind_address),
        });
    }

    if config.store.table.is_empty() {
        errors.push(ValidationError {
            field: "store.table".to_string(),
            message: "table name must not be empty".to_string(),
        });
    }

    if config.store.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "store.request_timeout_secs".to_string(),
            message: "timeout must be greater than zero".to_string(),
        });
    }

    if !config.store.url.is_empty() && url::Url::parse(&config.store.url).is_err() {
        errors.push(ValidationError {
            field: "store.url".to_string(),
            message: format!("not a valid URL: '{}'", config.store.url),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".to_string(),
            message: "timeout must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
