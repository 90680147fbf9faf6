//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the `compress` tool
//! over stdio until the client disconnects or an interrupt arrives.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use sevenzip_mcp_server::core::config::LoggingConfig;
use sevenzip_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging first so configuration problems are reported on stderr
    init_logging(&LoggingConfig::from_env());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config);

    info!("Server initialized");

    let transport = TransportService::new();
    let lifecycle = transport.lifecycle().clone();
    transport.run(server).await?;

    info!("Server shutting down ({:?})", lifecycle.state());

    // The blocking stdin reader cannot be interrupted, so don't wait for the
    // runtime to join it.
    std::process::exit(0)
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the protocol.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
