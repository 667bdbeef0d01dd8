//! Unified error type for all tasklog operations.

use std::path::PathBuf;

/// Error type for tasklog operations.
///
/// Buffering, merging and joining are infallible; only persistence and
/// configuration loading produce errors.
#[derive(Debug)]
pub enum Error {
    /// The log directory could not be created or accessed.
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The log file could not be written.
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid path.
    InvalidPath(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreation { path, source } => {
                write!(f, "failed to create log directory {}: {source}", path.display())
            }
            Self::FileWrite { path, source } => {
                write!(f, "failed to write log file {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreation { source, .. } | Self::FileWrite { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::ConfigDirNotFound | Self::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
