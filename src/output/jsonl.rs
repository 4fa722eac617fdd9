#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All error records (sorted by file, line, column) - only if verbose
//! 2. All per-file summary records (sorted by file)
//! 3. One status record

use crate::engine::report::{ApplyReport, CheckReport};
use serde::Serialize;
use std::path::PathBuf;

/// JSONL output formatter
///
/// Formats reports as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format a check report as JSONL
    ///
    /// # Arguments
    ///
    /// * `report` - The check report to format
    /// * `verbose` - If true, output per-error records. If false, skip them.
    pub fn format(&self, report: &CheckReport, verbose: bool) -> String {
        let mut output = String::new();

        if verbose {
            let mut errors: Vec<ErrorRecord> = Vec::new();
            for status in &report.statuses {
                for diagnostic in &status.diagnostics {
                    errors.push(ErrorRecord {
                        record_type: "error".to_string(),
                        file: status.path.clone(),
                        line: diagnostic.position.line,
                        column: diagnostic.position.column,
                        found: diagnostic.found.clone(),
                        expected: diagnostic.expected.clone(),
                    });
                }
            }

            errors.sort_by(|a, b| {
                a.file
                    .cmp(&b.file)
                    .then_with(|| a.line.cmp(&b.line))
                    .then_with(|| a.column.cmp(&b.column))
            });

            for error in errors {
                if let Ok(json) = serde_json::to_string(&error) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }

        let mut summaries: Vec<SummaryRecord> = Vec::new();
        for status in &report.statuses {
            summaries.push(SummaryRecord {
                record_type: "summary".to_string(),
                file: status.path.clone(),
                errors: status.diagnostics.len() as u64,
                incomplete_format: status.incomplete_format,
                status: if status.passed { "pass" } else { "fail" }.to_string(),
            });
        }
        summaries.sort_by(|a, b| a.file.cmp(&b.file));

        for summary in summaries {
            if let Ok(json) = serde_json::to_string(&summary) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let status = StatusRecord {
            record_type: "status".to_string(),
            passed: report.passed,
            files_checked: report.statuses.len() as u64,
            files_failed: report.files_failed as u64,
            total_errors: report.total_errors as u64,
        };
        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }

    /// Format an apply report as JSONL
    ///
    /// One `formatted` record per file (including untouched ones, with
    /// `edits: 0`), then one status record.
    pub fn format_apply(&self, report: &ApplyReport) -> String {
        let mut output = String::new();

        let mut records: Vec<FormattedRecord> = Vec::new();
        for outcome in &report.outcomes {
            records.push(FormattedRecord {
                record_type: "formatted".to_string(),
                file: outcome.path.clone(),
                edits: outcome.edits_applied as u64,
            });
        }
        records.sort_by(|a, b| a.file.cmp(&b.file));

        for record in records {
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let status = ApplyStatusRecord {
            record_type: "status".to_string(),
            files_checked: report.outcomes.len() as u64,
            files_changed: report.files_changed as u64,
            total_edits: report.total_edits as u64,
        };
        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Error record for JSONL output
#[derive(Debug, Serialize)]
struct ErrorRecord {
    #[serde(rename = "type")]
    record_type: String,
    file: PathBuf,
    line: u32,
    column: u32,
    found: String,
    expected: String,
}

/// Per-file summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: String,
    file: PathBuf,
    errors: u64,
    incomplete_format: bool,
    status: String,
}

/// Check status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: String,
    passed: bool,
    files_checked: u64,
    files_failed: u64,
    total_errors: u64,
}

/// Apply record for JSONL output
#[derive(Debug, Serialize)]
struct FormattedRecord {
    #[serde(rename = "type")]
    record_type: String,
    file: PathBuf,
    edits: u64,
}

/// Apply status record for JSONL output
#[derive(Debug, Serialize)]
struct ApplyStatusRecord {
    #[serde(rename = "type")]
    record_type: String,
    files_checked: u64,
    files_changed: u64,
    total_edits: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::report::{ApplyOutcome, FileStatus};
    use crate::formatter::{Diagnostic, Position};
    use serde_json::Value;

    fn create_test_status(path: &str, diagnostics: Vec<Diagnostic>) -> FileStatus {
        FileStatus {
            path: PathBuf::from(path),
            passed: diagnostics.is_empty(),
            incomplete_format: false,
            diagnostics,
        }
    }

    fn create_test_diagnostic(line: u32, column: u32) -> Diagnostic {
        Diagnostic {
            position: Position { line, column },
            found: "  ".to_string(),
            expected: " ".to_string(),
        }
    }

    fn parse_lines(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_format_empty_report() {
        let formatter = JsonlFormatter::new();
        let report = CheckReport::from_statuses(vec![]);
        let lines = parse_lines(&formatter.format(&report, false));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "status");
        assert_eq!(lines[0]["passed"], true);
        assert_eq!(lines[0]["files_checked"], 0);
    }

    #[test]
    fn test_format_non_verbose_skips_error_records() {
        let formatter = JsonlFormatter::new();
        let report = CheckReport::from_statuses(vec![create_test_status(
            "src/main.c",
            vec![create_test_diagnostic(10, 5)],
        )]);
        let lines = parse_lines(&formatter.format(&report, false));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "summary");
        assert_eq!(lines[0]["file"], "src/main.c");
        assert_eq!(lines[0]["errors"], 1);
        assert_eq!(lines[0]["status"], "fail");
        assert_eq!(lines[1]["type"], "status");
        assert_eq!(lines[1]["passed"], false);
        assert_eq!(lines[1]["files_failed"], 1);
        assert_eq!(lines[1]["total_errors"], 1);
    }

    #[test]
    fn test_format_verbose_includes_error_records() {
        let formatter = JsonlFormatter::new();
        let report = CheckReport::from_statuses(vec![create_test_status(
            "src/main.c",
            vec![create_test_diagnostic(10, 5), create_test_diagnostic(2, 1)],
        )]);
        let lines = parse_lines(&formatter.format(&report, true));

        assert_eq!(lines.len(), 4);
        // error records sorted by line within the file
        assert_eq!(lines[0]["type"], "error");
        assert_eq!(lines[0]["line"], 2);
        assert_eq!(lines[1]["line"], 10);
        assert_eq!(lines[1]["column"], 5);
        assert_eq!(lines[1]["found"], "  ");
        assert_eq!(lines[1]["expected"], " ");
    }

    #[test]
    fn test_format_error_records_sorted_across_files() {
        let formatter = JsonlFormatter::new();
        let report = CheckReport::from_statuses(vec![
            create_test_status("z.c", vec![create_test_diagnostic(1, 1)]),
            create_test_status("a.c", vec![create_test_diagnostic(5, 2)]),
        ]);
        let lines = parse_lines(&formatter.format(&report, true));

        assert_eq!(lines[0]["file"], "a.c");
        assert_eq!(lines[1]["file"], "z.c");
    }

    #[test]
    fn test_format_incomplete_format_field() {
        let formatter = JsonlFormatter::new();
        let mut status = create_test_status("src/broken.c", vec![]);
        status.incomplete_format = true;
        let report = CheckReport::from_statuses(vec![status]);
        let lines = parse_lines(&formatter.format(&report, false));

        assert_eq!(lines[0]["incomplete_format"], true);
        assert_eq!(lines[0]["status"], "pass");
    }

    #[test]
    fn test_format_is_deterministic() {
        let formatter = JsonlFormatter::new();
        let report = CheckReport::from_statuses(vec![
            create_test_status("b.c", vec![create_test_diagnostic(1, 1)]),
            create_test_status("a.c", vec![]),
        ]);

        assert_eq!(
            formatter.format(&report, true),
            formatter.format(&report, true)
        );
    }

    #[test]
    fn test_format_apply_records() {
        let formatter = JsonlFormatter::new();
        let report = ApplyReport::from_outcomes(vec![
            ApplyOutcome {
                path: PathBuf::from("src/util.c"),
                edits_applied: 0,
            },
            ApplyOutcome {
                path: PathBuf::from("src/main.c"),
                edits_applied: 3,
            },
        ]);
        let lines = parse_lines(&formatter.format_apply(&report));

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["type"], "formatted");
        assert_eq!(lines[0]["file"], "src/main.c");
        assert_eq!(lines[0]["edits"], 3);
        assert_eq!(lines[1]["file"], "src/util.c");
        assert_eq!(lines[1]["edits"], 0);
        assert_eq!(lines[2]["type"], "status");
        assert_eq!(lines[2]["files_changed"], 1);
        assert_eq!(lines[2]["total_edits"], 3);
    }

    #[test]
    fn test_format_apply_empty_report() {
        let formatter = JsonlFormatter::new();
        let report = ApplyReport::from_outcomes(vec![]);
        let lines = parse_lines(&formatter.format_apply(&report));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "status");
        assert_eq!(lines[0]["files_changed"], 0);
    }
}
