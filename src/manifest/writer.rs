//! Manifest file writing and update operations
//!
//! This module provides:
//! - ManifestWriter for rewriting one dependency's version across manifests
//! - Dry-run mode support (no actual file modifications)
//! - Line preservation: untouched lines are written back byte-for-byte
//!
//! Files are truncated and rewritten in place. There is no atomic replace,
//! so an interrupted write can leave a partial manifest.

use crate::domain::{UpdateRecord, UpdateReport};
use crate::error::ManifestError;
use crate::manifest::{ManifestParser, ManifestPath};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writer for manifest files that applies version updates
pub struct ManifestWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

/// Result of rewriting a single manifest file
#[derive(Debug)]
pub struct WriteResult {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Matching declaration lines
    pub records: Vec<UpdateRecord>,
    /// Whether the file was actually modified
    pub file_modified: bool,
}

impl WriteResult {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            file_modified: false,
        }
    }

    /// Returns true if any line's text changed
    pub fn has_changes(&self) -> bool {
        self.records.iter().any(|r| r.changed)
    }
}

impl ManifestWriter {
    /// Create a new ManifestWriter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Rewrite every declaration of `package` in one manifest
    pub fn update_manifest(
        &self,
        manifest: &ManifestPath,
        parser: &dyn ManifestParser,
        package: &str,
        new_version: &str,
    ) -> Result<WriteResult, ManifestError> {
        let mut result = WriteResult::new(&manifest.path);

        let content = read_manifest(&manifest.path)?;
        let rewrite = parser.rewrite_version(&content, package, new_version);

        result.records = rewrite
            .occurrences
            .into_iter()
            .map(|occurrence| UpdateRecord {
                label: manifest.label.clone(),
                path: manifest.path.clone(),
                line: occurrence.line,
                previous_version: occurrence.previous_version,
                new_version: new_version.to_string(),
                changed: occurrence.changed,
            })
            .collect();

        debug!(
            path = %manifest.path.display(),
            occurrences = result.records.len(),
            "rewrote dependency lines"
        );

        // Write back only when the content changed and not in dry-run mode
        if result.has_changes() && !self.dry_run {
            write_manifest(&manifest.path, &rewrite.content)?;
            result.file_modified = true;
        }

        Ok(result)
    }

    /// Rewrite `package` across all manifests, stopping at the first I/O error
    pub fn update_all(
        &self,
        manifests: &[ManifestPath],
        parser: &dyn ManifestParser,
        package: &str,
        new_version: &str,
    ) -> Result<UpdateReport, ManifestError> {
        let mut report = UpdateReport::new(package, new_version, self.dry_run);

        for manifest in manifests {
            let result = self.update_manifest(manifest, parser, package, new_version)?;
            if result.file_modified {
                report.files_written.push(result.path);
            }
            report.records.extend(result.records);
        }

        Ok(report)
    }
}

/// Read a manifest file content safely
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Write content to a manifest file
fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
