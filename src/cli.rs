//! CLI argument parsing module for modsync

use crate::manifest::{detect_manifests, ManifestPath};
use clap::Parser;
use std::path::PathBuf;

/// Compare and update go.mod files across projects
#[derive(Parser, Debug, Clone)]
#[command(
    name = "modsync",
    version,
    about = "Compare and update go.mod files across projects"
)]
pub struct CliArgs {
    /// Directory paths to compare go.mod files
    #[arg(required = true, num_args = 1..)]
    pub directories: Vec<PathBuf>,

    /// Dependency (module path) to update in go.mod files
    #[arg(long, value_name = "MODULE")]
    pub update_repo: Option<String>,

    /// New version to set in go.mod files
    #[arg(long, value_name = "VERSION")]
    pub update_version: Option<String>,

    // General options
    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

/// A dependency rewrite requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub dependency: String,
    pub new_version: String,
}

impl CliArgs {
    /// Returns the requested update when both update flags are present
    ///
    /// Passing only one of the two flags falls back to comparison mode.
    pub fn update_request(&self) -> Option<UpdateRequest> {
        match (&self.update_repo, &self.update_version) {
            (Some(dependency), Some(new_version)) => Some(UpdateRequest {
                dependency: dependency.clone(),
                new_version: new_version.clone(),
            }),
            _ => None,
        }
    }

    /// go.mod paths for the given directories that actually exist
    pub fn manifest_paths(&self) -> Vec<ManifestPath> {
        detect_manifests(&self.directories)
    }
}
