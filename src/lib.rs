#![forbid(unsafe_code)]

//! clangfmt: check and apply clang-format formatting across a C/C++ file set
//!
//! clangfmt wraps an external `clang-format` binary: it discovers source
//! files, parses the formatter's replacement report, maps byte offsets back
//! to line/column positions, and reports or applies the suggested edits.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod output;

pub use error::{Error, Result};

use crate::cli::{Cli, Command};
use crate::config::{Config, OutputFormat};
use crate::engine::{collect_source_files, ExecutionEngine};
use crate::formatter::ClangFormat;
use crate::output::{HumanFormatter, JsonlFormatter};

/// Exit codes
pub const EXIT_CLEAN: i32 = 0;
pub const EXIT_FORMAT_ERRORS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Run the tool and return the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    config.apply_cli_overrides(&cli);

    if let Some(jobs) = cli.jobs.filter(|&n| n > 0) {
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global();
    }

    let runner = ClangFormat::new(
        config.format.executable.clone(),
        config.format.style.clone(),
    );
    runner.probe()?;
    let engine = ExecutionEngine::new(runner);

    match &cli.command {
        Command::Check(args) => {
            let files = collect_source_files(&args.paths, &config)?;
            let report = engine.check(&files)?;
            match config.output.format {
                OutputFormat::Human => {
                    HumanFormatter::new(config.output.color.to_termcolor())
                        .write_to_stdout(&report)
                        .map_err(Error::Output)?;
                }
                OutputFormat::Jsonl => {
                    print!(
                        "{}",
                        JsonlFormatter::new().format(&report, config.output.verbose)
                    );
                }
            }
            Ok(if report.passed {
                EXIT_CLEAN
            } else {
                EXIT_FORMAT_ERRORS
            })
        }
        Command::Apply(args) => {
            let files = collect_source_files(&args.paths, &config)?;
            let report = engine.apply(&files)?;
            match config.output.format {
                OutputFormat::Human => {
                    HumanFormatter::new(config.output.color.to_termcolor())
                        .write_apply_to_stdout(&report)
                        .map_err(Error::Output)?;
                }
                OutputFormat::Jsonl => {
                    print!("{}", JsonlFormatter::new().format_apply(&report));
                }
            }
            Ok(EXIT_CLEAN)
        }
    }
}
