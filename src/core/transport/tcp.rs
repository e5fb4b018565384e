//! TCP transport implementation.
//!
//! Raw TCP socket transport with JSON-RPC messages (line-delimited).

use rmcp::ServiceExt;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::shutdown::shutdown_signal;
use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the TCP transport until the process is interrupted.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("TCP transport closed on interrupt");
                    return Ok(());
                }
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer_addr)) => {
                        info!("Accepted connection from {}", peer_addr);

                        // Set TCP_NODELAY to disable Nagle's algorithm
                        if let Err(e) = stream.set_nodelay(true) {
                            warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                        }

                        let server = server.clone();
                        tokio::spawn(async move {
                            Self::handle_connection(server, stream, peer_addr).await;
                        });
                    }
                    Err(e) => {
                        warn!("Failed to accept connection: {}", e);
                        // Small delay to avoid spinning on persistent errors
                        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                    }
                }
            }
        }
    }

    /// Handle a single TCP connection.
    async fn handle_connection(
        server: McpServer,
        stream: tokio::net::TcpStream,
        peer_addr: std::net::SocketAddr,
    ) {
        let service = match server.serve(stream).await {
            Ok(s) => {
                info!("Client {} connected, serving...", peer_addr);
                s
            }
            Err(e) => {
                warn!("Failed to initialize service for {}: {}", peer_addr, e);
                return;
            }
        };

        if let Err(e) = service.waiting().await {
            warn!("Error while serving client {}: {}", peer_addr, e);
        } else {
            info!("Client {} disconnected cleanly", peer_addr);
        }
    }
}
