//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Mismatch listing grouped by dependency
//! - One line per rewritten dependency declaration
//! - Optional colors and verbose file locations

use crate::domain::{MismatchRecord, MismatchReport, UpdateRecord, UpdateReport};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self, dry_run: bool) -> String {
        if dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    fn format_mismatch_line(
        &self,
        record: &MismatchRecord,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "{} {}: {} | {}: {}",
                "DIFFERENT-VERSIONS:".yellow(),
                record.left_label,
                record.left_version.red(),
                record.right_label,
                record.right_version.red()
            )
        } else {
            writeln!(writer, "{}", record)
        }
    }

    fn format_update_line(
        &self,
        dependency: &str,
        record: &UpdateRecord,
        prefix: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let location = if self.verbosity == Verbosity::Verbose {
            format!(" ({}:{})", record.path.display(), record.line)
        } else {
            String::new()
        };

        if self.color {
            writeln!(
                writer,
                "{}REPO: {}  dependency: {}  existing-version: {}   new-version: {}{}",
                prefix,
                record.label.bold(),
                dependency,
                record.previous_version.dimmed(),
                record.new_version.bright_white().bold(),
                location.dimmed()
            )
        } else {
            writeln!(
                writer,
                "{}REPO: {}  dependency: {}  existing-version: {}   new-version: {}{}",
                prefix,
                record.label,
                dependency,
                record.previous_version,
                record.new_version,
                location
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_comparison(
        &self,
        report: &MismatchReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if report.is_empty() {
            if self.verbosity != Verbosity::Quiet {
                if self.color {
                    writeln!(writer, "{}", "No version mismatches found.".green())?;
                } else {
                    writeln!(writer, "No version mismatches found.")?;
                }
            }
            return Ok(());
        }

        for group in report.groups() {
            if self.color {
                writeln!(writer, "{}", group.dependency.bold())?;
            } else {
                writeln!(writer, "{}", group.dependency)?;
            }
            for record in &group.mismatches {
                self.format_mismatch_line(record, writer)?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "\n{} mismatches across {} dependencies",
                report.len(),
                report.groups().len()
            )?;
        }

        Ok(())
    }

    fn format_update(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        let prefix = self.dry_run_prefix(report.dry_run);
        writeln!(
            writer,
            "{}Updated {} to version {}",
            prefix, report.dependency, report.new_version
        )?;

        if report.is_empty() {
            writeln!(writer, "No declarations of {} found.", report.dependency)?;
            return Ok(());
        }

        for record in &report.records {
            self.format_update_line(&report.dependency, record, &prefix, writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "\n{} of {} declarations changed, {} files written",
                report.changed_count(),
                report.records.len(),
                report.files_written.len()
            )?;
        }

        Ok(())
    }
}
