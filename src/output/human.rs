#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::engine::report::{ApplyReport, CheckReport};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Formats check and apply reports for terminal display with optional
/// colors.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format a check report for human consumption
    ///
    /// Returns a formatted string suitable for terminal display.
    pub fn format(&self, report: &CheckReport) -> String {
        let mut output = String::new();

        if report.statuses.is_empty() {
            output.push_str("No source files found\n");
            return output;
        }

        for status in &report.statuses {
            if status.passed && !status.incomplete_format {
                continue;
            }

            output.push_str(&format!(
                "{} [{}]\n\n",
                status.path.display(),
                error_count(status.diagnostics.len())
            ));

            if status.incomplete_format {
                output.push_str("  warning: clang-format could not fully format this file\n\n");
            }

            for diagnostic in &status.diagnostics {
                output.push_str(&format!(
                    "  {}:{}:{}\n",
                    status.path.display(),
                    diagnostic.position.line,
                    diagnostic.position.column
                ));
                output.push_str(&format!(
                    "      found {:?} expected {:?}\n",
                    diagnostic.found, diagnostic.expected
                ));
                output.push('\n');
            }
        }

        output.push_str("Summary:\n\n");
        for status in &report.statuses {
            if status.passed {
                output.push_str(&format!("  ✓ {}: ok\n", status.path.display()));
            } else {
                output.push_str(&format!(
                    "  ✗ {}: {}\n",
                    status.path.display(),
                    error_count(status.diagnostics.len())
                ));
            }
        }
        output.push('\n');

        if report.passed {
            output.push_str("Check PASSED\n");
        } else {
            output.push_str(&format!(
                "Check FAILED: {} of {} file{} need{} formatting ({})\n",
                report.files_failed,
                report.statuses.len(),
                if report.statuses.len() == 1 { "" } else { "s" },
                if report.files_failed == 1 { "s" } else { "" },
                error_count(report.total_errors)
            ));
        }

        output
    }

    /// Write the formatted check report to stdout with colors
    pub fn write_to_stdout(&self, report: &CheckReport) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        if report.statuses.is_empty() {
            writeln!(stdout, "No source files found")?;
            return Ok(());
        }

        for status in &report.statuses {
            if status.passed && !status.incomplete_format {
                continue;
            }

            stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(stdout, "{}", status.path.display())?;
            stdout.reset()?;
            writeln!(stdout, " [{}]", error_count(status.diagnostics.len()))?;
            writeln!(stdout)?;

            if status.incomplete_format {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                writeln!(
                    stdout,
                    "  warning: clang-format could not fully format this file"
                )?;
                stdout.reset()?;
                writeln!(stdout)?;
            }

            for diagnostic in &status.diagnostics {
                write!(stdout, "  ")?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                write!(
                    stdout,
                    "{}:{}:{}",
                    status.path.display(),
                    diagnostic.position.line,
                    diagnostic.position.column
                )?;
                stdout.reset()?;
                writeln!(stdout)?;
                writeln!(
                    stdout,
                    "      found {:?} expected {:?}",
                    diagnostic.found, diagnostic.expected
                )?;
                writeln!(stdout)?;
            }
        }

        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "Summary:")?;
        stdout.reset()?;
        writeln!(stdout)?;

        for status in &report.statuses {
            write!(stdout, "  ")?;
            if status.passed {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(stdout, "✓")?;
                stdout.reset()?;
                writeln!(stdout, " {}: ok", status.path.display())?;
            } else {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(stdout, "✗")?;
                stdout.reset()?;
                writeln!(
                    stdout,
                    " {}: {}",
                    status.path.display(),
                    error_count(status.diagnostics.len())
                )?;
            }
        }
        writeln!(stdout)?;

        if report.passed {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            writeln!(stdout, "Check PASSED")?;
        } else {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(
                stdout,
                "Check FAILED: {} of {} file{} need{} formatting ({})",
                report.files_failed,
                report.statuses.len(),
                if report.statuses.len() == 1 { "" } else { "s" },
                if report.files_failed == 1 { "s" } else { "" },
                error_count(report.total_errors)
            )?;
            stdout.reset()?;
            writeln!(stdout)?;
        }
        stdout.reset()?;

        Ok(())
    }

    /// Format an apply report for human consumption
    pub fn format_apply(&self, report: &ApplyReport) -> String {
        let mut output = String::new();

        if report.outcomes.is_empty() {
            output.push_str("No source files found\n");
            return output;
        }

        for outcome in &report.outcomes {
            if outcome.edits_applied > 0 {
                output.push_str(&format!(
                    "  {}: {} applied\n",
                    outcome.path.display(),
                    edit_count(outcome.edits_applied)
                ));
            }
        }
        if report.files_changed > 0 {
            output.push('\n');
        }

        if report.files_changed == 0 {
            output.push_str("Nothing to format, all files clean\n");
        } else {
            output.push_str(&format!(
                "Formatted {} file{} ({} applied)\n",
                report.files_changed,
                if report.files_changed == 1 { "" } else { "s" },
                edit_count(report.total_edits)
            ));
        }

        output
    }

    /// Write the formatted apply report to stdout with colors
    pub fn write_apply_to_stdout(&self, report: &ApplyReport) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        if report.outcomes.is_empty() {
            writeln!(stdout, "No source files found")?;
            return Ok(());
        }

        for outcome in &report.outcomes {
            if outcome.edits_applied > 0 {
                write!(stdout, "  ")?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                write!(stdout, "{}", outcome.path.display())?;
                stdout.reset()?;
                writeln!(stdout, ": {} applied", edit_count(outcome.edits_applied))?;
            }
        }
        if report.files_changed > 0 {
            writeln!(stdout)?;
        }

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        if report.files_changed == 0 {
            writeln!(stdout, "Nothing to format, all files clean")?;
        } else {
            writeln!(
                stdout,
                "Formatted {} file{} ({} applied)",
                report.files_changed,
                if report.files_changed == 1 { "" } else { "s" },
                edit_count(report.total_edits)
            )?;
        }
        stdout.reset()?;

        Ok(())
    }
}

fn error_count(count: usize) -> String {
    if count == 1 {
        "1 error".to_string()
    } else {
        format!("{} errors", count)
    }
}

fn edit_count(count: usize) -> String {
    if count == 1 {
        "1 edit".to_string()
    } else {
        format!("{} edits", count)
    }
}
