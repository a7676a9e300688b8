//! Error types for specgen

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Specgen error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Target output file is already present on disk
    #[error("File {} exists. Remove it first", .path.display())]
    AlreadyExists {
        /// Path that was found
        path: PathBuf,
    },

    /// Filesystem failure while checking or writing a target
    #[error("I/O error on {}", .path.display())]
    Io {
        /// Path being checked or written
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// Spec value could not be rendered as JSON
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::AlreadyExists`] for `path`
    #[must_use]
    pub fn already_exists(path: impl AsRef<Path>) -> Self {
        Self::AlreadyExists {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Build an [`Error::Io`] tying `source` to `path`
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The path this error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::AlreadyExists { path } | Self::Io { path, .. } => Some(path),
            Self::Serialization(_) => None,
        }
    }
}

/// Result type alias for specgen operations
pub type Result<T> = std::result::Result<T, Error>;
