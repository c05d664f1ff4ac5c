//! External data-store client subsystem.
//!
//! # Responsibilities
//! - Define the `ProfileStore` port the HTTP handler is written against
//! - Provide the production REST implementation (`RestStore`)
//! - Surface store rejections verbatim, distinct from transport failures
//!
//! # Design Decisions
//! - The store is an injected `Arc<dyn ProfileStore>` constructed once at
//!   startup, never a global (tests substitute a fake)
//! - The gateway never retries and never inspects a successful response body;
//!   it only looks at the error indicator
//! - Error messages from the store pass through to the client unmodified

pub mod rest;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use rest::RestStore;

/// Errors that can occur while inserting into the data store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store accepted the request but rejected the row
    /// (constraint violation, duplicate key, unknown column).
    #[error("{message}")]
    Rejected { message: String },

    /// Network-level failure reaching the store.
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured store URL could not be used to build a request.
    #[error("invalid store URL: {0}")]
    InvalidUrl(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Capability to insert a record into a named table.
///
/// Object-safe so the server can hold it as `Arc<dyn ProfileStore>`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert a single record; the only inspected outcome is the error.
    async fn insert(&self, table: &str, record: &Value) -> StoreResult<()>;
}
