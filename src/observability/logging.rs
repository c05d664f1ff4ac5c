//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_level` applies to the gateway and its HTTP middleware when the
/// environment supplies no filter of its own.
pub fn init(default_level: &str) {
    let directives = format!("profile_gateway={0},tower_http={0}", default_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| directives.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
