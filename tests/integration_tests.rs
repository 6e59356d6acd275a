//! Integration tests for modsync
//!
//! These tests verify:
//! - go.mod detection across project directories
//! - Pairwise mismatch comparison over real files
//! - In-place version updates and their interaction with parsing

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create `<root>/<name>/go.mod` with the given content and return the directory
fn create_project(root: &Path, name: &str, content: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("go.mod"), content).unwrap();
    dir
}

const M1: &str = "module example.com/m1

go 1.21

require (
\talpha v1.0.0
\tbeta v2.0.0
)
";

const M2: &str = "module example.com/m2

go 1.21

require (
\talpha v1.1.0
\tbeta v2.0.0
)
";

mod manifest_detection {
    use super::*;
    use modsync::manifest::detect_manifests;

    #[test]
    fn test_detect_skips_directories_without_go_mod() {
        let temp_dir = create_test_dir();
        let m1 = create_project(temp_dir.path(), "m1", M1);
        let no_mod = temp_dir.path().join("docs");
        fs::create_dir_all(&no_mod).unwrap();
        let m2 = create_project(temp_dir.path(), "m2", M2);

        let manifests = detect_manifests(&[m1, no_mod, m2]);
        let labels: Vec<&str> = manifests.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["m1", "m2"]);
    }
}

mod comparison {
    use super::*;
    use modsync::compare::compare_manifests;
    use modsync::manifest::detect_manifests;

    #[test]
    fn test_scenario_single_alpha_mismatch() {
        let temp_dir = create_test_dir();
        let m1 = create_project(temp_dir.path(), "m1", M1);
        let m2 = create_project(temp_dir.path(), "m2", M2);

        let report = compare_manifests(&detect_manifests(&[m1, m2])).unwrap();

        assert_eq!(report.len(), 1);
        let alpha = report.group("alpha").expect("alpha should mismatch");
        assert_eq!(alpha.mismatches[0].left_label, "m1");
        assert_eq!(alpha.mismatches[0].left_version, "v1.0.0");
        assert_eq!(alpha.mismatches[0].right_label, "m2");
        assert_eq!(alpha.mismatches[0].right_version, "v1.1.0");
        assert!(report.group("beta").is_none());
    }

    #[test]
    fn test_identical_manifests() {
        let temp_dir = create_test_dir();
        let a = create_project(temp_dir.path(), "a", M1);
        let b = create_project(temp_dir.path(), "b", M1);

        let report = compare_manifests(&detect_manifests(&[a, b])).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_reversed_order_swaps_labels_only() {
        let temp_dir = create_test_dir();
        let m1 = create_project(temp_dir.path(), "m1", M1);
        let m2 = create_project(temp_dir.path(), "m2", M2);

        let forward = compare_manifests(&detect_manifests(&[m1.clone(), m2.clone()])).unwrap();
        let backward = compare_manifests(&detect_manifests(&[m2, m1])).unwrap();

        let f = &forward.group("alpha").unwrap().mismatches[0];
        let b = &backward.group("alpha").unwrap().mismatches[0];
        assert_eq!((f.left_version.as_str(), f.right_version.as_str()), ("v1.0.0", "v1.1.0"));
        assert_eq!((b.left_version.as_str(), b.right_version.as_str()), ("v1.1.0", "v1.0.0"));
        assert_eq!(f.left_label, b.right_label);
    }

    #[test]
    fn test_manifest_without_require_block() {
        let temp_dir = create_test_dir();
        let m1 = create_project(temp_dir.path(), "m1", M1);
        let bare = create_project(temp_dir.path(), "bare", "module example.com/bare\n\ngo 1.21\n");

        let report = compare_manifests(&detect_manifests(&[m1, bare])).unwrap();
        assert!(report.is_empty());
    }
}

mod update {
    use super::*;
    use modsync::manifest::{detect_manifests, parse_manifest, GoModParser, ManifestWriter};

    #[test]
    fn test_scenario_update_alpha() {
        let temp_dir = create_test_dir();
        let m1 = create_project(temp_dir.path(), "m1", M1);
        let m2 = create_project(temp_dir.path(), "m2", M2);
        let manifests = detect_manifests(&[m1.clone(), m2]);

        let report = ManifestWriter::new(false)
            .update_all(&manifests, &GoModParser, "alpha", "v1.2.0")
            .unwrap();
        assert_eq!(report.changed_count(), 2);

        let content = fs::read_to_string(m1.join("go.mod")).unwrap();
        assert_eq!(content, M1.replace("alpha v1.0.0", "alpha v1.2.0"));

        let table = parse_manifest(&m1.join("go.mod")).unwrap();
        assert_eq!(table.get("alpha"), Some("v1.2.0"));
        assert_eq!(table.get("beta"), Some("v2.0.0"));
    }

    #[test]
    fn test_update_then_compare_has_no_mismatch() {
        let temp_dir = create_test_dir();
        let m1 = create_project(temp_dir.path(), "m1", M1);
        let m2 = create_project(temp_dir.path(), "m2", M2);
        let manifests = detect_manifests(&[m1, m2]);

        ManifestWriter::new(false)
            .update_all(&manifests, &GoModParser, "alpha", "v1.2.0")
            .unwrap();

        let report = modsync::compare::compare_manifests(&manifests).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_update_is_idempotent() {
        let temp_dir = create_test_dir();
        let m1 = create_project(temp_dir.path(), "m1", M1);
        let m2 = create_project(temp_dir.path(), "m2", M2);
        let manifests = detect_manifests(&[m1.clone(), m2]);
        let writer = ManifestWriter::new(false);

        writer
            .update_all(&manifests, &GoModParser, "alpha", "v1.2.0")
            .unwrap();
        let after_first = fs::read_to_string(m1.join("go.mod")).unwrap();

        let second = writer
            .update_all(&manifests, &GoModParser, "alpha", "v1.2.0")
            .unwrap();
        let after_second = fs::read_to_string(m1.join("go.mod")).unwrap();

        assert_eq!(after_first, after_second);
        assert_eq!(second.changed_count(), 0);
        assert!(second.files_written.is_empty());
    }

    #[test]
    fn test_update_leaves_other_lines_untouched() {
        let original = "module example.com/keep\n\
                        \n\
                        go 1.21\n\
                        \n\
                        require (\n\
                        \tgithub.com/a/lib v1.0.0\n\
                        \tgithub.com/a/libextra v1.0.0 // indirect\n\
                        \t  golang.org/x/text   v0.13.0   // spacing\n\
                        )\n\
                        \n\
                        replace github.com/a/lib => ../lib\n";
        let temp_dir = create_test_dir();
        let keep = create_project(temp_dir.path(), "keep", original);
        let other = create_project(temp_dir.path(), "other", M1);

        ManifestWriter::new(false)
            .update_all(
                &detect_manifests(&[keep.clone(), other]),
                &GoModParser,
                "github.com/a/lib",
                "v1.5.0",
            )
            .unwrap();

        let updated = fs::read_to_string(keep.join("go.mod")).unwrap();
        let before: Vec<&str> = original.split_inclusive('\n').collect();
        let after: Vec<&str> = updated.split_inclusive('\n').collect();
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.trim_start().starts_with("github.com/a/lib ") {
                assert_eq!(*new, "\tgithub.com/a/lib v1.5.0\n");
            } else {
                assert_eq!(old, new);
            }
        }
    }
}
