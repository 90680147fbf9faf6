//! Archiver domain module.
//!
//! The gateway never compresses anything itself. It hands a validated
//! [`ArchiveRequest`] to an [`Archiver`], which in production is the external
//! 7-Zip binary ([`SevenZipArchiver`]) and in tests a recording fake.

mod error;
mod format;
mod sevenzip;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{ArchiverError, UNKNOWN_ERROR};
pub use format::ArchiveFormat;
pub use sevenzip::SevenZipArchiver;

/// A request to create one archive.
#[derive(Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    /// Files to add, in the order given by the caller.
    pub files: Vec<String>,

    /// Path of the archive to create or update.
    pub destination: String,

    /// Archive format.
    pub format: ArchiveFormat,

    /// Encryption password.
    pub password: Option<String>,
}

impl ArchiveRequest {
    /// Build the 7-Zip argument list: `a <dest> <files...> -t<format> [-p<password>]`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.files.len() + 4);
        args.push("a".to_string());
        args.push(self.destination.clone());
        args.extend(self.files.iter().cloned());
        args.push(self.format.type_flag());
        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            args.push(format!("-p{}", password));
        }
        args
    }

    /// Whether the archive will be password protected.
    pub fn is_encrypted(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

impl std::fmt::Debug for ArchiveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveRequest")
            .field("files", &self.files)
            .field("destination", &self.destination)
            .field("format", &self.format)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Something that can produce archives.
///
/// Implementations run to completion; there is no progress reporting and no
/// cancellation.
#[async_trait::async_trait]
pub trait Archiver: Send + Sync {
    /// Create an archive described by `request`.
    async fn create_archive(&self, request: &ArchiveRequest) -> Result<(), ArchiverError>;
}
