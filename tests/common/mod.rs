//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use profile_gateway::config::GatewayConfig;
use profile_gateway::http::HttpServer;
use profile_gateway::lifecycle::Shutdown;
use profile_gateway::store::{ProfileStore, StoreError, StoreResult};

/// In-memory store that records every insert and answers a programmed result.
pub struct FakeStore {
    inserts: Mutex<Vec<(String, Value)>>,
    error_message: Option<String>,
}

impl FakeStore {
    /// A store that accepts every insert.
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            inserts: Mutex::new(Vec::new()),
            error_message: None,
        })
    }

    /// A store that rejects every insert with the given message.
    pub fn rejecting(message: &str) -> Arc<Self> {
        Arc::new(Self {
            inserts: Mutex::new(Vec::new()),
            error_message: Some(message.to_string()),
        })
    }

    /// Snapshot of the records delegated so far, as (table, record) pairs.
    pub fn recorded(&self) -> Vec<(String, Value)> {
        self.inserts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileStore for FakeStore {
    async fn insert(&self, table: &str, record: &Value) -> StoreResult<()> {
        self.inserts
            .lock()
            .unwrap()
            .push((table.to_string(), record.clone()));
        match &self.error_message {
            Some(message) => Err(StoreError::Rejected {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Spawn a gateway with default config on an ephemeral loopback port.
pub async fn spawn_gateway(store: Arc<dyn ProfileStore>) -> (SocketAddr, Shutdown) {
    spawn_gateway_with_config(GatewayConfig::default(), store).await
}

/// Spawn a gateway with the given config on an ephemeral loopback port.
pub async fn spawn_gateway_with_config(
    config: GatewayConfig,
    store: Arc<dyn ProfileStore>,
) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config, store);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Start a raw-TCP mock data-store endpoint answering a fixed response.
///
/// Returns the bound address. Reads the request before responding so the
/// client finishes writing its body.
#[allow(dead_code)]
pub async fn start_mock_store(status: u16, response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 8192];
                        let _ = socket.read(&mut buf).await;

                        let status_text = match status {
                            200 => "200 OK",
                            201 => "201 Created",
                            400 => "400 Bad Request",
                            401 => "401 Unauthorized",
                            404 => "404 Not Found",
                            409 => "409 Conflict",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            response.len(),
                            response
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
