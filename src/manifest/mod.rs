//! Manifest file detection, parsing and rewriting
//!
//! This module provides functionality to:
//! - Locate go.mod files in project directories
//! - Parse the dependency block of a go.mod into a DependencyTable
//! - Rewrite one dependency's version in place

mod detector;
mod go_mod;
mod writer;

pub use detector::{detect_manifests, ManifestPath, MANIFEST_FILENAME};
pub use go_mod::GoModParser;
pub use writer::{read_manifest, ManifestWriter};

use crate::domain::DependencyTable;
use crate::error::ManifestError;
use std::path::Path;
use tracing::debug;

/// Trait for parsing and rewriting manifest files
pub trait ManifestParser {
    /// Parse dependencies from manifest content
    fn parse(&self, content: &str) -> Result<DependencyTable, ManifestError>;

    /// Replace the version of every declaration of `package` in the content
    fn rewrite_version(&self, content: &str, package: &str, new_version: &str) -> Rewrite;
}

/// Content produced by a rewrite along with every line it touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Full manifest content after the rewrite
    pub content: String,
    /// Matching lines, in file order
    pub occurrences: Vec<LineRewrite>,
}

/// A single declaration line matched by a rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRewrite {
    /// 1-based line number
    pub line: usize,
    /// Version found on the line before the rewrite
    pub previous_version: String,
    /// Whether the line text changed
    pub changed: bool,
}

/// Parse dependencies from a go.mod file path
pub fn parse_manifest(path: &Path) -> Result<DependencyTable, ManifestError> {
    let content = read_manifest(path)?;
    let table = GoModParser.parse(&content)?;
    debug!(path = %path.display(), dependencies = table.len(), "parsed manifest");
    Ok(table)
}
