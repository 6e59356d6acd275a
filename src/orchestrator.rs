//! Orchestrator for coordinating a comparison or update run
//!
//! This module provides:
//! - Input validation (at least two directories, at least two go.mod files)
//! - Mode selection: update when both update flags are set, compare otherwise
//! - Dry-run mode support for updates

use crate::cli::CliArgs;
use crate::compare::compare_manifests;
use crate::domain::{MismatchReport, UpdateReport};
use crate::error::{AppError, ConfigError};
use crate::manifest::{GoModParser, ManifestPath, ManifestWriter};
use tracing::info;

/// Minimum number of directories and manifests a run needs
const MIN_MANIFESTS: usize = 2;

/// Orchestrator for coordinating the workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Comparison mode: mismatches between every pair of manifests
    Comparison(MismatchReport),
    /// Update mode: every rewritten declaration
    Update(UpdateReport),
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Validate input and locate the manifests to work on
    pub fn resolve_manifests(&self) -> Result<Vec<ManifestPath>, ConfigError> {
        let count = self.args.directories.len();
        if count < MIN_MANIFESTS {
            return Err(ConfigError::NotEnoughDirectories { count });
        }

        let manifests = self.args.manifest_paths();
        if manifests.len() < MIN_MANIFESTS {
            return Err(ConfigError::NotEnoughManifests {
                count: manifests.len(),
            });
        }

        Ok(manifests)
    }

    /// Run the selected workflow
    pub fn run(&self) -> Result<RunOutcome, AppError> {
        let manifests = self.resolve_manifests()?;

        match self.args.update_request() {
            Some(request) => {
                info!(
                    dependency = %request.dependency,
                    version = %request.new_version,
                    manifests = manifests.len(),
                    dry_run = self.args.dry_run,
                    "updating dependency"
                );
                let writer = ManifestWriter::new(self.args.dry_run);
                let report = writer.update_all(
                    &manifests,
                    &GoModParser,
                    &request.dependency,
                    &request.new_version,
                )?;
                Ok(RunOutcome::Update(report))
            }
            None => {
                info!(manifests = manifests.len(), "comparing manifests");
                let report = compare_manifests(&manifests)?;
                Ok(RunOutcome::Comparison(report))
            }
        }
    }
}
