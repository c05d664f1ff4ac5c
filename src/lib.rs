//! Profile Insert Gateway
//!
//! A small HTTP service that fronts a hosted data store: it checks that a
//! bearer token is present, normalizes the `gender` field of an incoming
//! profile, and delegates the row insert to the store's REST API.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → http/server.rs (Axum setup, middleware, CORS headers)
//!     → http/handlers.rs (preflight short-circuit, token check, body parse)
//!     → profile (gender normalization, insert record)
//!     → store (delegated insert via REST client)
//!     → response mapping (200 / 400 / 401 / 500)
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod profile;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::ProfileStore;
