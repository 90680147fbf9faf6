//! 7-Zip MCP Server Library
//!
//! This crate exposes a single Model Context Protocol tool, `compress`, that
//! packs files into zip, 7z, tar or gzip archives by running an external
//! 7-Zip executable.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **archiver**: the `Archiver` abstraction and the 7-Zip process adapter
//!   - **tools**: tool schemas, the `compress` tool and the tool registry
//!
//! # Example
//!
//! ```rust,no_run
//! use sevenzip_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     TransportService::new().run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
