//! Transport layer for the MCP server.
//!
//! The server speaks line-delimited JSON-RPC over standard input/output.
//! The process lifecycle (`Running -> Closing -> Terminated`) is tracked by
//! [`Lifecycle`] and driven by OS shutdown signals.

mod error;
mod lifecycle;
mod service;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use lifecycle::{Lifecycle, LifecycleState, shutdown_signal};
pub use service::TransportService;
