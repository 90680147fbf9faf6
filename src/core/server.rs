//! MCP Server implementation.
//!
//! This module contains the server handler that implements the MCP protocol
//! by delegating discovery and invocation to the [`ToolRegistry`].
//!
//! Tool calls are dispatched by hand rather than through an rmcp
//! `ToolRouter` so that unknown tools are answered with `MethodNotFound`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::archiver::{Archiver, SevenZipArchiver};
use crate::domains::tools::{ToolError, ToolRegistry};

/// The main MCP server handler.
///
/// Cloning is cheap; clones share the configuration and the archiver.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry used to answer tool requests.
    tools: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a server that runs the archiver named in `config`.
    pub fn new(config: Config) -> Self {
        let archiver = Arc::new(SevenZipArchiver::new(config.archiver.binary_path.clone()));
        Self::with_archiver(config, archiver)
    }

    /// Create a server backed by a caller-supplied archiver.
    pub fn with_archiver(config: Config, archiver: Arc<dyn Archiver>) -> Self {
        Self {
            config: Arc::new(config),
            tools: Arc::new(ToolRegistry::new(archiver)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// The tool descriptors returned on discovery.
    pub fn tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Run a tool by name.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        self.tools.call_tool(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Compresses files into zip, 7z, tar or gzip archives with 7-Zip. \
                 Call the `compress` tool with the files, a destination path and a format."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.invoke(&request.name, request.arguments)
            .await
            .map_err(McpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::archiver::fake::FakeArchiver;
    use serde_json::json;

    fn server(archiver: Arc<FakeArchiver>) -> McpServer {
        McpServer::with_archiver(Config::with_archiver("/usr/bin/7z"), archiver)
    }

    #[test]
    fn test_server_info() {
        let server = server(Arc::new(FakeArchiver::succeeding()));
        let info = server.get_info();
        assert_eq!(info.server_info.name, "7zip-mcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
    }

    #[test]
    fn test_discovery_advertises_compress_only() {
        let server = server(Arc::new(FakeArchiver::succeeding()));
        let tools = server.tools();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "compress");
        assert_eq!(
            tools[0].input_schema["required"],
            json!(["files", "destination", "format"])
        );
        assert_eq!(
            tools[0].input_schema["properties"]["format"]["enum"],
            json!(["zip", "7z", "tar", "gzip"])
        );
        assert!(tools[0].input_schema["properties"].get("password").is_some());
    }

    #[tokio::test]
    async fn test_invoke_maps_to_protocol_errors() {
        let archiver = Arc::new(FakeArchiver::failing(Some("ERROR: cannot open a.txt")));
        let server = server(archiver.clone());

        let err: McpError = server.invoke("decompress", None).await.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);

        let args = json!({ "files": ["a.txt"], "destination": "out.zip", "format": "zip" });
        let err: McpError = server
            .invoke("compress", args.as_object().cloned())
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("ERROR: cannot open a.txt"));
        assert_eq!(archiver.calls().len(), 1);
    }
}
