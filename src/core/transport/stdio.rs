//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.

use rmcp::ServiceExt;
use tracing::info;

use super::shutdown::shutdown_signal;
use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects or the process
    /// is interrupted.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;
        let cancel = service.cancellation_token();

        tokio::select! {
            result = service.waiting() => {
                let reason = result.map_err(|e| TransportError::ServiceError(e.to_string()))?;
                info!("STDIO transport finished: {:?}", reason);
            }
            _ = shutdown_signal() => {
                cancel.cancel();
                info!("STDIO transport closed on interrupt");
            }
        }

        Ok(())
    }
}
