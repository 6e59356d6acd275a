//! go.mod detection across project directories
//!
//! Each directory given on the command line is expected to hold a go.mod at
//! its root. Directories without one are skipped.

use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the manifest looked up in every project directory
pub const MANIFEST_FILENAME: &str = "go.mod";

/// A go.mod path together with the short label used in reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPath {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Name of the directory containing the manifest
    pub label: String,
}

impl ManifestPath {
    /// Create a ManifestPath, deriving the label from the parent directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = manifest_label(&path);
        Self { path, label }
    }

    /// Manifest path for a project directory
    pub fn for_directory(dir: &Path) -> Self {
        Self::new(dir.join(MANIFEST_FILENAME))
    }
}

/// Returns the last segment of the manifest's parent directory
///
/// Works on the path text rather than normalized components, so `.` segments
/// are kept: `repo1/./go.mod` is labeled `.`, and a manifest at the
/// filesystem root gets an empty label.
fn manifest_label(path: &Path) -> String {
    let text = path.to_string_lossy();
    let parent = match text.rfind('/') {
        Some(index) => {
            let head = &text[..=index];
            match head.trim_end_matches('/') {
                "" => head,
                trimmed => trimmed,
            }
        }
        None => "",
    };
    parent.rsplit('/').next().unwrap_or_default().to_string()
}

/// Derive go.mod paths for the given directories, dropping those without one
///
/// Input order is preserved; it determines the pair order used by comparison.
pub fn detect_manifests(dirs: &[PathBuf]) -> Vec<ManifestPath> {
    dirs.iter()
        .map(|dir| ManifestPath::for_directory(dir))
        .filter(|manifest| {
            let exists = manifest.path.is_file();
            if !exists {
                debug!(path = %manifest.path.display(), "no go.mod found, skipping");
            }
            exists
        })
        .collect()
}
