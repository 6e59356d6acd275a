//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of mismatch reports grouped by dependency
//! - JSON serialization of update records per rewritten line

use crate::domain::{MismatchGroup, MismatchReport, UpdateRecord, UpdateReport};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a comparison run
#[derive(Serialize)]
struct JsonComparison<'a> {
    mode: &'static str,
    /// Total number of mismatch records
    mismatch_count: usize,
    /// Mismatches grouped by dependency
    dependencies: &'a [MismatchGroup],
}

/// JSON representation of an update run
#[derive(Serialize)]
struct JsonUpdate<'a> {
    mode: &'static str,
    dry_run: bool,
    dependency: &'a str,
    new_version: &'a str,
    /// Number of declarations whose text changed
    changed: usize,
    updates: Vec<JsonUpdateLine<'a>>,
    /// Files written back to disk (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files_written: Vec<String>,
}

/// JSON representation of one rewritten declaration
#[derive(Serialize)]
struct JsonUpdateLine<'a> {
    repo: &'a str,
    path: String,
    line: usize,
    from: &'a str,
    to: &'a str,
    changed: bool,
}

impl<'a> From<&'a UpdateRecord> for JsonUpdateLine<'a> {
    fn from(record: &'a UpdateRecord) -> Self {
        Self {
            repo: &record.label,
            path: record.path.display().to_string(),
            line: record.line,
            from: &record.previous_version,
            to: &record.new_version,
            changed: record.changed,
        }
    }
}

fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

impl OutputFormatter for JsonFormatter {
    fn format_comparison(
        &self,
        report: &MismatchReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonComparison {
            mode: "compare",
            mismatch_count: report.len(),
            dependencies: report.groups(),
        };
        write_json(&output, writer)
    }

    fn format_update(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let files_written = if self.verbosity == Verbosity::Verbose {
            report
                .files_written
                .iter()
                .map(|p| p.display().to_string())
                .collect()
        } else {
            Vec::new()
        };

        let output = JsonUpdate {
            mode: "update",
            dry_run: report.dry_run,
            dependency: &report.dependency,
            new_version: &report.new_version,
            changed: report.changed_count(),
            updates: report.records.iter().map(JsonUpdateLine::from).collect(),
            files_written,
        };
        write_json(&output, writer)
    }
}
