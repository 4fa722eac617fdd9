//! Command-line argument definitions
//!
//! Output format and color enums are shared with the configuration file
//! and live in [`crate::config`]; the flags here override `clangfmt.toml`.

use crate::config::{ColorOption, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check and apply clang-format formatting across a C/C++ file set
#[derive(Debug, Parser)]
#[command(name = "clangfmt", version, about)]
pub struct Cli {
    /// Path to clangfmt.toml (overrides auto-discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Coding style, pass-through to clang-format's -style=<value>
    #[arg(short, long, global = true, value_name = "STYLE")]
    pub style: Option<String>,

    /// Path of clang-format if it is not on PATH
    #[arg(short, long, global = true, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// When to use colored output
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorOption>,

    /// Emit per-error records in JSONL output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Number of parallel formatter processes (0 = one per core)
    #[arg(short, long, global = true, value_name = "N")]
    pub jobs: Option<usize>,

    /// Exclude files matching a glob pattern (can be repeated)
    #[arg(long, global = true, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check formatting and report suggested edits without modifying files
    Check(PathArgs),
    /// Apply suggested edits to the files in place
    Apply(PathArgs),
}

/// Files, directories, or glob patterns to process
#[derive(Debug, clap::Args)]
pub struct PathArgs {
    /// Paths to check; configured source roots when omitted
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_with_paths() {
        let cli = Cli::try_parse_from(["clangfmt", "check", "src/main.c", "lib/"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(
                    args.paths,
                    vec![PathBuf::from("src/main.c"), PathBuf::from("lib/")]
                );
            }
            Command::Apply(_) => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_apply_without_paths() {
        let cli = Cli::try_parse_from(["clangfmt", "apply"]).unwrap();
        match cli.command {
            Command::Apply(args) => assert!(args.paths.is_empty()),
            Command::Check(_) => panic!("expected apply subcommand"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "clangfmt",
            "check",
            "--style",
            "llvm",
            "--executable",
            "/usr/bin/clang-format-14",
            "--format",
            "jsonl",
            "--color",
            "never",
            "src",
        ])
        .unwrap();
        assert_eq!(cli.style.as_deref(), Some("llvm"));
        assert_eq!(
            cli.executable,
            Some(PathBuf::from("/usr/bin/clang-format-14"))
        );
        assert_eq!(cli.format, Some(OutputFormat::Jsonl));
        assert_eq!(cli.color, Some(ColorOption::Never));
    }

    #[test]
    fn test_defaults_are_unset() {
        let cli = Cli::try_parse_from(["clangfmt", "check"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.style.is_none());
        assert!(cli.executable.is_none());
        assert!(cli.format.is_none());
        assert!(cli.color.is_none());
        assert!(!cli.verbose);
        assert!(cli.jobs.is_none());
        assert!(cli.exclude.is_empty());
    }

    #[test]
    fn test_exclude_repeated() {
        let cli = Cli::try_parse_from([
            "clangfmt",
            "check",
            "--exclude",
            "**/build/**",
            "--exclude",
            "*_generated.c",
        ])
        .unwrap();
        assert_eq!(cli.exclude, vec!["**/build/**", "*_generated.c"]);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["clangfmt"]).is_err());
    }

    #[test]
    fn test_inline_style_passes_through() {
        let cli =
            Cli::try_parse_from(["clangfmt", "check", "--style", "{BasedOnStyle: llvm}", "src"])
                .unwrap();
        assert_eq!(cli.style.as_deref(), Some("{BasedOnStyle: llvm}"));
    }

    #[test]
    fn test_jobs_flag() {
        let cli = Cli::try_parse_from(["clangfmt", "apply", "--jobs", "4"]).unwrap();
        assert_eq!(cli.jobs, Some(4));
    }
}
