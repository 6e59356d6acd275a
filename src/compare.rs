//! Pairwise version mismatch detection across go.mod files
//!
//! Every unordered pair (i, j) with i < j is compared, i ascending then j
//! ascending. Within a pair, common dependencies are visited in lexicographic
//! order, so the report order is fully determined by the input order.

use crate::domain::{DependencyTable, MismatchRecord, MismatchReport};
use crate::error::{AppError, ConfigError};
use crate::manifest::{parse_manifest, ManifestPath};
use tracing::debug;

/// Compare every pair of manifests and collect dependencies pinned differently
///
/// Manifests are re-read from disk for each pair they take part in.
pub fn compare_manifests(manifests: &[ManifestPath]) -> Result<MismatchReport, AppError> {
    if manifests.len() < 2 {
        return Err(ConfigError::NotEnoughManifests {
            count: manifests.len(),
        }
        .into());
    }

    let mut report = MismatchReport::new();

    for (i, left) in manifests.iter().enumerate() {
        for right in &manifests[i + 1..] {
            let left_deps = parse_manifest(&left.path)?;
            let right_deps = parse_manifest(&right.path)?;

            let before = report.len();
            compare_tables(
                &left.label,
                &left_deps,
                &right.label,
                &right_deps,
                &mut report,
            );
            debug!(
                left = %left.label,
                right = %right.label,
                mismatches = report.len() - before,
                "compared manifest pair"
            );
        }
    }

    Ok(report)
}

/// Record a mismatch for each shared dependency whose versions differ
pub fn compare_tables(
    left_label: &str,
    left: &DependencyTable,
    right_label: &str,
    right: &DependencyTable,
    report: &mut MismatchReport,
) {
    for name in left.common_names(right) {
        let (Some(left_version), Some(right_version)) = (left.get(name), right.get(name)) else {
            continue;
        };
        if left_version != right_version {
            report.push(MismatchRecord::new(
                name,
                left_label,
                left_version,
                right_label,
                right_version,
            ));
        }
    }
}
