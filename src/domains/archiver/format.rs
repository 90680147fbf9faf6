//! Archive formats understood by the archiver.

use std::fmt;
use std::str::FromStr;

use super::ArchiverError;

/// An archive format supported by the `compress` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    Zip,
    SevenZip,
    Tar,
    Gzip,
}

impl ArchiveFormat {
    /// Every supported format, in the order advertised to clients.
    pub const ALL: [ArchiveFormat; 4] = [Self::Zip, Self::SevenZip, Self::Tar, Self::Gzip];

    /// Wire names of every supported format.
    pub const NAMES: [&'static str; 4] = ["zip", "7z", "tar", "gzip"];

    /// The wire name of this format (also the value passed to `-t`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::SevenZip => "7z",
            Self::Tar => "tar",
            Self::Gzip => "gzip",
        }
    }

    /// The archive type switch for the 7-Zip command line.
    pub fn type_flag(&self) -> String {
        format!("-t{}", self.as_str())
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchiveFormat {
    type Err = ArchiverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ArchiverError::UnsupportedFormat(s.to_string()))
    }
}
