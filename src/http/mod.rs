//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → server.rs (Axum setup, middleware, CORS response headers)
//!     → request.rs (request ID stamping)
//!     → handlers.rs (preflight short-circuit, token check, parse, insert)
//!     → error.rs (error → status + JSON body mapping)
//!     → Send to client
//! ```

pub mod cors;
pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
