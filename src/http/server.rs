//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the insert handler
//! - Wire up middleware (tracing, timeout, request ID, CORS headers)
//! - Bind server to listener and serve until shutdown
//!
//! # Design Decisions
//! - A single catch-all route: the endpoint dispatches on method internally
//!   (OPTIONS preflight vs. insert), so every path and method lands in the
//!   same handler
//! - CORS headers are applied as outermost response layers so that every
//!   response carries them, including timeouts and error bodies
//! - The store is injected as `Arc<dyn ProfileStore>`; tests substitute a fake

use std::sync::Arc;
use std::time::Duration;

use axum::http::header;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::cors;
use crate::http::handlers::insert_profile;
use crate::http::request::RequestIdLayer;
use crate::store::ProfileStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Long-lived data-store client, constructed once at startup.
    pub store: Arc<dyn ProfileStore>,
    /// Table the profile rows are inserted into.
    pub table: Arc<str>,
}

/// HTTP server for the profile gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: GatewayConfig, store: Arc<dyn ProfileStore>) -> Self {
        let state = AppState {
            store,
            table: Arc::from(config.store.table.as_str()),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(insert_profile))
            .route("/", any(insert_profile))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                cors::header_value(&config.cors.allow_origin),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                cors::header_value(&config.cors.allow_headers),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                cors::header_value(&config.cors.allow_methods),
            ))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
