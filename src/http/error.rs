//! Endpoint error definitions and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by the insert endpoint.
///
/// All three kinds go straight to the caller as `{"error": <message>}`;
/// nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bearer token absent or empty. Fixed message.
    #[error("Missing auth token")]
    MissingToken,

    /// The data store rejected the insert; its message passes through verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Anything else: malformed body, store unreachable.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected { message } => ApiError::Rejected(message),
            other => ApiError::Unexpected(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
