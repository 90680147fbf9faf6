//! Compress tool definition.
//!
//! Packs files into a zip, 7z, tar or gzip archive by delegating to the
//! configured [`Archiver`].

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::archiver::{ArchiveFormat, ArchiveRequest, Archiver};
use crate::domains::tools::ToolError;
use crate::domains::tools::schema::{ParamSchema, ParamSpec, ParamType};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the compress tool.
#[derive(Clone, Deserialize)]
pub struct CompressParams {
    /// The files to compress.
    pub files: Vec<String>,

    /// The destination path for the compressed file.
    pub destination: String,

    /// The format to use for compression.
    pub format: String,

    /// The password to use for encryption (optional).
    #[serde(default)]
    pub password: Option<String>,
}

impl std::fmt::Debug for CompressParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressParams")
            .field("files", &self.files)
            .field("destination", &self.destination)
            .field("format", &self.format)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of a compress operation
#[derive(Debug, Serialize, JsonSchema)]
struct CompressResult {
    /// Path of the archive that was written
    destination: String,
    /// Archive format used
    format: String,
    /// Number of input paths handed to the archiver
    file_count: usize,
    /// Whether the archive is password protected
    encrypted: bool,
}

// ============================================================================
// Tool Definition
// ============================================================================

const COMPRESS_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("files", ParamType::StringArray, "The files to compress"),
    ParamSpec::required(
        "destination",
        ParamType::String,
        "The destination path for the compressed file",
    ),
    ParamSpec::required("format", ParamType::String, "The format to use for compression")
        .one_of(&ArchiveFormat::NAMES),
    ParamSpec::optional(
        "password",
        ParamType::String,
        "The password to use for encryption (optional)",
    ),
];

/// Compress tool - creates archives with the external archiver.
pub struct CompressTool;

impl CompressTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "compress";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Compress files using 7-Zip";

    /// Parameter table, shared by discovery and validation.
    pub const SCHEMA: ParamSchema = ParamSchema::new(COMPRESS_PARAMS);

    /// Validate raw call arguments and turn them into an archive request.
    pub fn parse(arguments: JsonObject) -> Result<ArchiveRequest, ToolError> {
        Self::SCHEMA
            .validate(&arguments)
            .map_err(|e| ToolError::invalid_params(e.to_string()))?;

        let params: CompressParams = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_params(e.to_string()))?;

        let format = params
            .format
            .parse::<ArchiveFormat>()
            .map_err(|e| ToolError::invalid_params(e.to_string()))?;

        Ok(ArchiveRequest {
            files: params.files,
            destination: params.destination,
            format,
            password: params.password,
        })
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(destination = %request.destination, format = %request.format))]
    pub async fn execute(
        request: ArchiveRequest,
        archiver: &dyn Archiver,
    ) -> Result<CallToolResult, ToolError> {
        info!(
            "Compress tool called: {} file(s) -> '{}'",
            request.files.len(),
            request.destination
        );

        if request.files.is_empty() {
            warn!("No input files given, passing the request to the archiver anyway");
        }

        if let Err(e) = archiver.create_archive(&request).await {
            warn!("Archiver failed for '{}': {}", request.destination, e);
            return Err(ToolError::internal(format!("7-Zip error: {}", e)));
        }

        info!("Created archive '{}'", request.destination);

        let summary = format!("Files compressed successfully to {}", request.destination);

        let result = CompressResult {
            destination: request.destination.clone(),
            format: request.format.to_string(),
            file_count: request.files.len(),
            encrypted: request.is_encrypted(),
        };

        let structured = serde_json::to_value(&result)
            .map_err(|e| ToolError::internal(format!("Failed to serialize result: {}", e)))?;

        Ok(CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: Arc::new(Self::SCHEMA.to_json_schema()),
            annotations: None,
            output_schema: Some(Arc::new(schema_for_type::<CompressResult>())),
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
