//! The profile insert endpoint.
//!
//! # Responsibilities
//! - Short-circuit CORS preflight (OPTIONS) before any processing
//! - Require a non-empty bearer token (presence only, never verified)
//! - Parse the JSON body, normalize gender, delegate the insert
//! - Map the outcome to 200 / 400 / 401 / 500 with a JSON body

use std::time::Instant;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::error::ApiError;
use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::profile::ProfileInput;

/// Upper bound on buffered request bodies.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Single endpoint, method-dispatched internally on OPTIONS vs. other.
pub async fn insert_profile(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response {
    let start = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().clone();

    let response = if method == Method::OPTIONS {
        preflight()
    } else {
        match handle_insert(&state, request).await {
            Ok(response) => {
                tracing::debug!(request_id = %request_id, "Profile inserted");
                response
            }
            Err(err) => {
                tracing::warn!(
                    request_id = %request_id,
                    status = err.status().as_u16(),
                    error = %err,
                    "Insert request failed"
                );
                err.into_response()
            }
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}

/// CORS preflight: 200 "ok" with no body processing.
/// The CORS headers themselves come from the response layers.
fn preflight() -> Response {
    (StatusCode::OK, "ok").into_response()
}

async fn handle_insert(state: &AppState, request: Request<Body>) -> Result<Response, ApiError> {
    if bearer_token(request.headers()).is_empty() {
        return Err(ApiError::MissingToken);
    }

    let body = to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::Unexpected(e.to_string()))?;
    let input: ProfileInput =
        serde_json::from_slice(&body).map_err(|e| ApiError::Unexpected(e.to_string()))?;

    let record = input.into_record();
    state.store.insert(&state.table, &record).await?;

    Ok((StatusCode::OK, Json(json!({"success": true}))).into_response())
}

/// Extract the bearer token: absent header reads as empty, a literal
/// "Bearer " prefix is stripped, anything else passes through as-is.
fn bearer_token(headers: &HeaderMap) -> &str {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    auth.strip_prefix("Bearer ").unwrap_or(auth)
}
