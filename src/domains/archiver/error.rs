//! Archiver error types.

use thiserror::Error;

/// Fallback text when the archiver failed without saying why.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Errors reported by an [`Archiver`](super::Archiver).
#[derive(Debug, Error)]
pub enum ArchiverError {
    /// The requested format is not one the archiver accepts.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The archiver process could not be started.
    #[error("{0}")]
    Spawn(#[source] std::io::Error),

    /// The archiver ran and reported failure.
    #[error("{}", failure_message(.diagnostic, .exit_code))]
    Failed {
        /// Text the process wrote about the failure, if any.
        diagnostic: Option<String>,
        /// Exit code, absent when the process was killed by a signal.
        exit_code: Option<i32>,
    },
}

impl ArchiverError {
    /// Create a process failure from captured output.
    pub fn failed(diagnostic: Option<String>, exit_code: Option<i32>) -> Self {
        Self::Failed {
            diagnostic: diagnostic.filter(|d| !d.trim().is_empty()),
            exit_code,
        }
    }
}

fn failure_message(diagnostic: &Option<String>, exit_code: &Option<i32>) -> String {
    match (diagnostic, exit_code) {
        (Some(text), _) => text.clone(),
        (None, Some(code)) => format!("{} (exit code {})", UNKNOWN_ERROR, code),
        (None, None) => UNKNOWN_ERROR.to_string(),
    }
}
