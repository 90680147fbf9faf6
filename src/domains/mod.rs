//! Domains module containing business logic organized by bounded contexts.
//!
//! - **archiver**: the external archiving collaborator and its request model
//! - **tools**: MCP tools that can be executed by clients

pub mod archiver;
pub mod tools;
