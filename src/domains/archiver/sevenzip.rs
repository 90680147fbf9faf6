//! 7-Zip command-line adapter.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument, warn};

use super::{ArchiveRequest, Archiver, ArchiverError};

/// Runs the external 7-Zip executable once per request.
#[derive(Debug, Clone)]
pub struct SevenZipArchiver {
    binary: PathBuf,
}

impl SevenZipArchiver {
    /// Create an archiver that invokes the executable at `binary`.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait::async_trait]
impl Archiver for SevenZipArchiver {
    #[instrument(skip_all, fields(destination = %request.destination, format = %request.format))]
    async fn create_archive(&self, request: &ArchiveRequest) -> Result<(), ArchiverError> {
        debug!(
            "Running {} with {} file(s)",
            self.binary.display(),
            request.files.len()
        );

        let output = Command::new(&self.binary)
            .args(request.to_args())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                warn!("Failed to start {}: {}", self.binary.display(), e);
                ArchiverError::Spawn(e)
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let diagnostic = [stderr, stdout].into_iter().find(|text| !text.is_empty());

        warn!("Archiver exited with {}", output.status);
        Err(ArchiverError::failed(diagnostic, output.status.code()))
    }
}
