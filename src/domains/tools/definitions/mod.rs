//! Tool definitions module.
//!
//! Each tool is defined in its own file.

pub mod compress;

pub use compress::{CompressParams, CompressTool};
