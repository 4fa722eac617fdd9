#![forbid(unsafe_code)]

//! Check and apply execution across a file set
//!
//! Every file gets one clang-format invocation producing a replacement
//! report. Checking maps the report back to line/column diagnostics;
//! applying splices the reported edits into the file. Files are processed
//! in parallel; any per-file failure aborts the run.

use crate::engine::report::{ApplyOutcome, ApplyReport, CheckReport, FileStatus};
use crate::error::{Error, Result};
use crate::formatter::{diagnostics_for, ClangFormat};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ExecutionEngine {
    runner: ClangFormat,
}

impl ExecutionEngine {
    pub fn new(runner: ClangFormat) -> ExecutionEngine {
        ExecutionEngine { runner }
    }

    /// Check every file, reporting suggested edits without modifying anything
    pub fn check(&self, files: &[PathBuf]) -> Result<CheckReport> {
        let statuses = files
            .par_iter()
            .map(|path| self.check_file(path))
            .collect::<Result<Vec<_>>>()?;
        Ok(CheckReport::from_statuses(statuses))
    }

    fn check_file(&self, path: &Path) -> Result<FileStatus> {
        let set = self.runner.replacements(path)?;
        let source = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let diagnostics = diagnostics_for(&source, &set);
        Ok(FileStatus {
            path: path.to_path_buf(),
            passed: diagnostics.is_empty(),
            incomplete_format: set.incomplete_format,
            diagnostics,
        })
    }

    /// Apply the suggested edits to every file in place
    pub fn apply(&self, files: &[PathBuf]) -> Result<ApplyReport> {
        let outcomes = files
            .par_iter()
            .map(|path| self.apply_file(path))
            .collect::<Result<Vec<_>>>()?;
        Ok(ApplyReport::from_outcomes(outcomes))
    }

    fn apply_file(&self, path: &Path) -> Result<ApplyOutcome> {
        let set = self.runner.replacements(path)?;
        if set.is_clean() {
            return Ok(ApplyOutcome {
                path: path.to_path_buf(),
                edits_applied: 0,
            });
        }

        let source = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let formatted = set.apply(path, &source)?;
        if formatted != source {
            fs::write(path, &formatted).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(ApplyOutcome {
            path: path.to_path_buf(),
            edits_applied: set.replacements.len(),
        })
    }
}

// Subprocess-backed tests live in tests/format_integration_tests.rs where a
// fake clang-format can be provisioned.
