//! Gateway binary entrypoint.
//!
//! Loads configuration (TOML file and/or environment), builds the store
//! client once, and serves the insert endpoint until shutdown.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use profile_gateway::config::loader;
use profile_gateway::http::HttpServer;
use profile_gateway::lifecycle::Shutdown;
use profile_gateway::observability::{logging, metrics};
use profile_gateway::store::RestStore;

#[derive(Parser, Debug)]
#[command(
    name = "profile-gateway",
    about = "HTTP endpoint inserting profile rows into a hosted data store"
)]
struct Args {
    /// Path to a TOML config file. Without it, configuration comes from
    /// defaults plus SUPABASE_URL / SUPABASE_SERVICE_ROLE_KEY.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => loader::from_env()?,
    };

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        store_url = %config.store.url,
        table = %config.store.table,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let store = Arc::new(RestStore::new(config.store.clone())?);
    let shutdown = Shutdown::new();

    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
