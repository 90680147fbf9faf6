//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of tool descriptors returned on discovery
//! - Dispatch of tool calls by name

use std::sync::Arc;
use tracing::warn;

use rmcp::model::{CallToolResult, JsonObject, Tool};

use crate::domains::archiver::Archiver;

use super::ToolError;
use super::definitions::CompressTool;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    archiver: Arc<dyn Archiver>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `archiver`.
    pub fn new(archiver: Arc<dyn Archiver>) -> Self {
        Self { archiver }
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![CompressTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            CompressTool::NAME => {
                let request = CompressTool::parse(arguments.unwrap_or_default())?;
                CompressTool::execute(request, self.archiver.as_ref()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::method_not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::archiver::fake::FakeArchiver;
    use serde_json::json;

    fn registry(archiver: &Arc<FakeArchiver>) -> ToolRegistry {
        ToolRegistry::new(archiver.clone())
    }

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[test]
    fn test_registry_lists_single_tool() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "compress");
    }

    #[tokio::test]
    async fn test_call_unknown_tool_never_runs_archiver() {
        let archiver = Arc::new(FakeArchiver::succeeding());
        let err = registry(&archiver)
            .call_tool("extract", args(json!({ "format": "zip" })))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::MethodNotFound(_)));
        assert_eq!(err.to_string(), "Unknown tool: extract");
        assert!(archiver.calls().is_empty());
    }

    #[tokio::test]
    async fn test_call_unsupported_format_never_runs_archiver() {
        let archiver = Arc::new(FakeArchiver::succeeding());
        let err = registry(&archiver)
            .call_tool(
                "compress",
                args(json!({ "files": ["a.txt"], "destination": "out.rar", "format": "rar" })),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidParams(_)));
        assert!(err.to_string().contains("rar"));
        assert!(archiver.calls().is_empty());
    }

    #[tokio::test]
    async fn test_call_builds_exact_arguments() {
        let archiver = Arc::new(FakeArchiver::succeeding());
        let result = registry(&archiver)
            .call_tool(
                "compress",
                args(json!({
                    "files": ["a.txt", "b.txt"],
                    "destination": "out.zip",
                    "format": "zip"
                })),
            )
            .await
            .unwrap();

        assert_eq!(
            archiver.calls(),
            vec![vec!["a", "out.zip", "a.txt", "b.txt", "-tzip"]]
        );
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("out.zip"));
    }

    #[tokio::test]
    async fn test_call_with_password_appends_flag() {
        let archiver = Arc::new(FakeArchiver::succeeding());
        registry(&archiver)
            .call_tool(
                "compress",
                args(json!({
                    "files": ["a.txt", "b.txt"],
                    "destination": "out.zip",
                    "format": "zip",
                    "password": "secret"
                })),
            )
            .await
            .unwrap();

        let calls = archiver.calls();
        assert!(calls[0].ends_with(&["-tzip".to_string(), "-psecret".to_string()]));
    }

    #[tokio::test]
    async fn test_call_failure_falls_back_to_unknown_error() {
        let archiver = Arc::new(FakeArchiver::failing(None));
        let err = registry(&archiver)
            .call_tool(
                "compress",
                args(json!({ "files": ["a.txt"], "destination": "out.zip", "format": "zip" })),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::Internal(_)));
        assert!(err.to_string().starts_with("7-Zip error: Unknown error occurred"));
    }

    #[tokio::test]
    async fn test_registry_survives_failed_call() {
        let archiver = Arc::new(FakeArchiver::succeeding());
        let registry = registry(&archiver);

        let bad = registry.call_tool("compress", args(json!({ "format": "lzh" }))).await;
        assert!(bad.is_err());

        let good = registry
            .call_tool(
                "compress",
                args(json!({ "files": ["a"], "destination": "b.tar", "format": "tar" })),
            )
            .await;
        assert!(good.is_ok());
        assert_eq!(archiver.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_call_without_arguments_is_invalid_params() {
        let archiver = Arc::new(FakeArchiver::succeeding());
        let err = registry(&archiver).call_tool("compress", None).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));
    }
}
