//! Version mismatch records produced by pairwise manifest comparison

use serde::Serialize;
use std::fmt;

/// A dependency that two manifests pin to different versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchRecord {
    /// Module path of the dependency
    pub dependency: String,
    /// Label (parent directory name) of the first manifest in the pair
    pub left_label: String,
    /// Version recorded in the first manifest
    pub left_version: String,
    /// Label (parent directory name) of the second manifest in the pair
    pub right_label: String,
    /// Version recorded in the second manifest
    pub right_version: String,
}

impl MismatchRecord {
    pub fn new(
        dependency: impl Into<String>,
        left_label: impl Into<String>,
        left_version: impl Into<String>,
        right_label: impl Into<String>,
        right_version: impl Into<String>,
    ) -> Self {
        Self {
            dependency: dependency.into(),
            left_label: left_label.into(),
            left_version: left_version.into(),
            right_label: right_label.into(),
            right_version: right_version.into(),
        }
    }
}

impl fmt::Display for MismatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DIFFERENT-VERSIONS: {}: {} | {}: {}",
            self.left_label, self.left_version, self.right_label, self.right_version
        )
    }
}

/// All mismatches found for one dependency, in pair order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchGroup {
    pub dependency: String,
    pub mismatches: Vec<MismatchRecord>,
}

/// Mismatches grouped by dependency name
///
/// Groups keep the order in which their dependency was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MismatchReport {
    groups: Vec<MismatchGroup>,
}

impl MismatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to its dependency's group, creating the group if needed
    pub fn push(&mut self, record: MismatchRecord) {
        match self
            .groups
            .iter()
            .position(|g| g.dependency == record.dependency)
        {
            Some(index) => self.groups[index].mismatches.push(record),
            None => self.groups.push(MismatchGroup {
                dependency: record.dependency.clone(),
                mismatches: vec![record],
            }),
        }
    }

    pub fn groups(&self) -> &[MismatchGroup] {
        &self.groups
    }

    /// Returns the group for a dependency, if any mismatch was recorded for it
    pub fn group(&self, dependency: &str) -> Option<&MismatchGroup> {
        self.groups.iter().find(|g| g.dependency == dependency)
    }

    /// Total number of mismatch records across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.mismatches.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flat list of mismatch descriptions in report order
    pub fn lines(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.mismatches.iter().map(ToString::to_string))
            .collect()
    }
}
