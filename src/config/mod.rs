//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overlay: SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared with server and store at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the store client is built from it once
//! - All fields have defaults so the service runs with env vars alone
//! - Validation separates syntactic (serde) from semantic checks
//! - Empty store credentials are accepted: inserts then fail at the store,
//!   which matches how the hosted platform behaves with unset secrets

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::CorsConfig;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::StoreConfig;
