//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP.

use rmcp::{RoleServer, ServiceExt, transport::IntoTransport};
use tracing::info;

use super::{Lifecycle, TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects or shutdown is
    /// requested through `lifecycle`.
    pub async fn run(server: McpServer, lifecycle: Lifecycle) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");
        Self::run_with(server, rmcp::transport::stdio(), lifecycle).await
    }

    /// Serve `server` over any line-delimited transport with the same
    /// shutdown handling as [`run`](Self::run).
    pub async fn run_with<T, E, A>(
        server: McpServer,
        transport: T,
        lifecycle: Lifecycle,
    ) -> TransportResult<()>
    where
        T: IntoTransport<RoleServer, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let service = tokio::select! {
            service = server.serve(transport) => {
                service.map_err(|e| TransportError::init(e.to_string()))?
            }
            _ = lifecycle.closing() => {
                info!("Shutdown requested before initialization completed");
                lifecycle.terminate();
                return Ok(());
            }
        };

        let cancel = service.cancellation_token();
        let waiting = service.waiting();
        tokio::pin!(waiting);

        let quit_reason = tokio::select! {
            reason = &mut waiting => reason,
            _ = lifecycle.closing() => {
                info!("Closing transport");
                cancel.cancel();
                waiting.await
            }
        }
        .map_err(|e| TransportError::service(e.to_string()))?;

        lifecycle.terminate();
        info!("Transport finished: {:?}", quit_reason);
        Ok(())
    }
}
