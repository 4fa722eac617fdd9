//! Check and apply run results
//!
//! Reports aggregate per-file outcomes and precompute the totals the
//! output formatters need. Statuses are sorted by path so output is
//! deterministic regardless of execution order.

use crate::formatter::Diagnostic;
use std::path::PathBuf;

/// Check outcome for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// clang-format could not fully format the file (syntax error)
    pub incomplete_format: bool,
    pub passed: bool,
}

/// Result of a check run over a file set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub statuses: Vec<FileStatus>,
    pub passed: bool,
    pub files_failed: usize,
    pub total_errors: usize,
}

impl CheckReport {
    pub fn from_statuses(mut statuses: Vec<FileStatus>) -> CheckReport {
        statuses.sort_by(|a, b| a.path.cmp(&b.path));
        let files_failed = statuses.iter().filter(|s| !s.passed).count();
        let total_errors = statuses.iter().map(|s| s.diagnostics.len()).sum();
        CheckReport {
            passed: files_failed == 0,
            statuses,
            files_failed,
            total_errors,
        }
    }
}

/// Apply outcome for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub path: PathBuf,
    pub edits_applied: usize,
}

/// Result of an apply run over a file set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcomes: Vec<ApplyOutcome>,
    pub files_changed: usize,
    pub total_edits: usize,
}

impl ApplyReport {
    pub fn from_outcomes(mut outcomes: Vec<ApplyOutcome>) -> ApplyReport {
        outcomes.sort_by(|a, b| a.path.cmp(&b.path));
        let files_changed = outcomes.iter().filter(|o| o.edits_applied > 0).count();
        let total_edits = outcomes.iter().map(|o| o.edits_applied).sum();
        ApplyReport {
            outcomes,
            files_changed,
            total_edits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::Position;

    fn status(path: &str, errors: usize) -> FileStatus {
        let diagnostics = (0..errors)
            .map(|i| Diagnostic {
                position: Position {
                    line: i as u32 + 1,
                    column: 1,
                },
                found: "  ".to_string(),
                expected: " ".to_string(),
            })
            .collect::<Vec<_>>();
        FileStatus {
            path: PathBuf::from(path),
            passed: diagnostics.is_empty(),
            incomplete_format: false,
            diagnostics,
        }
    }

    #[test]
    fn test_check_report_empty() {
        let report = CheckReport::from_statuses(vec![]);
        assert!(report.passed);
        assert_eq!(report.files_failed, 0);
        assert_eq!(report.total_errors, 0);
    }

    #[test]
    fn test_check_report_all_clean() {
        let report = CheckReport::from_statuses(vec![status("a.c", 0), status("b.c", 0)]);
        assert!(report.passed);
        assert_eq!(report.files_failed, 0);
        assert_eq!(report.total_errors, 0);
    }

    #[test]
    fn test_check_report_counts_failures() {
        let report = CheckReport::from_statuses(vec![
            status("a.c", 2),
            status("b.c", 0),
            status("c.c", 3),
        ]);
        assert!(!report.passed);
        assert_eq!(report.files_failed, 2);
        assert_eq!(report.total_errors, 5);
    }

    #[test]
    fn test_check_report_sorts_by_path() {
        let report = CheckReport::from_statuses(vec![status("z.c", 0), status("a.c", 1)]);
        assert_eq!(report.statuses[0].path, PathBuf::from("a.c"));
        assert_eq!(report.statuses[1].path, PathBuf::from("z.c"));
    }

    #[test]
    fn test_apply_report_totals() {
        let report = ApplyReport::from_outcomes(vec![
            ApplyOutcome {
                path: PathBuf::from("b.c"),
                edits_applied: 3,
            },
            ApplyOutcome {
                path: PathBuf::from("a.c"),
                edits_applied: 0,
            },
        ]);
        assert_eq!(report.files_changed, 1);
        assert_eq!(report.total_edits, 3);
        assert_eq!(report.outcomes[0].path, PathBuf::from("a.c"));
    }
}
