//! Transport service - wires shutdown signals to the transport.

use tracing::{info, warn};

use super::{Lifecycle, shutdown_signal, stdio::StdioTransport};
use crate::core::{McpServer, Result};

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    lifecycle: Lifecycle,
}

impl TransportService {
    /// Create a new transport service.
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::new(),
        }
    }

    /// Get the lifecycle handle.
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method returns once the transport has been closed, either by the
    /// client or by an interrupt signal.
    pub async fn run(self, server: McpServer) -> Result<()> {
        info!("Starting transport: STDIO (standard MCP mode)");

        let lifecycle = self.lifecycle.clone();
        let signals = tokio::spawn(async move {
            match shutdown_signal().await {
                Ok(()) => {
                    info!("Shutdown signal received");
                    lifecycle.begin_closing();
                }
                Err(e) => warn!("Shutdown signals unavailable: {}", e),
            }
        });

        let result = StdioTransport::run(server, self.lifecycle.clone()).await;
        signals.abort();

        Ok(result?)
    }
}

impl Default for TransportService {
    fn default() -> Self {
        Self::new()
    }
}
