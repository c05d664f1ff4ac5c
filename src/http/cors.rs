//! CORS response headers.
//!
//! The gateway stamps a fixed CORS header set on every response — preflight,
//! success and all error branches alike — reproducing the shared header set
//! the original deployment used. Values come from `CorsConfig`.

use axum::http::HeaderValue;

/// Parse a configured header value.
///
/// A value that is not a legal header falls back to empty rather than
/// failing startup; the configuration validator does not inspect these.
pub fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| {
        tracing::warn!(value = %value, "Invalid CORS header value, sending empty");
        HeaderValue::from_static("")
    })
}
