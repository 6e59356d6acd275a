//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or rewriting go.mod files
//! - ConfigError: Input validation failures (too few directories/manifests)

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Input validation errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Returns true if this error is an input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to command-line input validation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two directories were given
    #[error("Please provide at least two directory paths to compare.")]
    NotEnoughDirectories { count: usize },

    /// Fewer than two directories actually contain a go.mod
    #[error("ERROR: At least two go.mod files are required.")]
    NotEnoughManifests { count: usize },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }
}
