//! Records of dependency lines rewritten by the updater

use serde::Serialize;
use std::path::PathBuf;

/// One dependency line rewritten in one manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRecord {
    /// Label (parent directory name) of the manifest
    pub label: String,
    /// Path to the manifest file
    pub path: PathBuf,
    /// 1-based line number of the rewritten line
    pub line: usize,
    /// Version found on the line before the rewrite
    pub previous_version: String,
    /// Version written in its place
    pub new_version: String,
    /// Whether the line text actually changed
    pub changed: bool,
}

/// Result of updating one dependency across all manifests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    /// Dependency that was targeted
    pub dependency: String,
    /// Version written to every matching line
    pub new_version: String,
    /// Whether this was a dry run (no files written)
    pub dry_run: bool,
    /// Every matching occurrence, in manifest then line order
    pub records: Vec<UpdateRecord>,
    /// Manifests whose content was written back to disk
    pub files_written: Vec<PathBuf>,
}

impl UpdateReport {
    pub fn new(
        dependency: impl Into<String>,
        new_version: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            dependency: dependency.into(),
            new_version: new_version.into(),
            dry_run,
            records: Vec::new(),
            files_written: Vec::new(),
        }
    }

    /// Number of occurrences whose text changed
    pub fn changed_count(&self) -> usize {
        self.records.iter().filter(|r| r.changed).count()
    }

    /// Returns true if no manifest declared the dependency
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
