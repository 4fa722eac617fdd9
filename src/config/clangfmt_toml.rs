//! Parsing and validation of `clangfmt.toml`
//!
//! The configuration file replaces the hard-coded source roots and
//! extension lists that would otherwise have to live in the tool itself.
//! All sections and keys are optional; a missing file means defaults.
//!
//! ```toml
//! [sources]
//! roots = ["lib/stm32-bootloader", "projects"]
//! extensions = ["c", "h", "cpp", "hpp"]
//! exclude = ["**/generated/**"]
//!
//! [format]
//! style = "file"
//! executable = "clang-format"
//!
//! [output]
//! format = "human"
//! color = "auto"
//! ```

use crate::cli::Cli;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// File name looked up during configuration discovery
pub const CONFIG_FILE_NAME: &str = "clangfmt.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub format: FormatConfig,
    pub output: OutputConfig,
}

/// Which files to discover when no explicit paths are given
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SourcesConfig {
    /// Directories walked recursively for source files
    pub roots: Vec<PathBuf>,
    /// File extensions treated as source files (leading dots tolerated)
    pub extensions: Vec<String>,
    /// Glob patterns for files and directories to skip
    pub exclude: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            roots: vec![PathBuf::from(".")],
            extensions: vec![
                "c".to_string(),
                "h".to_string(),
                "cpp".to_string(),
                "hpp".to_string(),
            ],
            exclude: Vec::new(),
        }
    }
}

/// How clang-format is invoked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FormatConfig {
    /// Value passed through to clang-format's `-style=<value>`
    pub style: String,
    /// clang-format executable, a name on PATH or an explicit path
    pub executable: PathBuf,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            style: "file".to_string(),
            executable: PathBuf::from("clang-format"),
        }
    }
}

/// Report rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorOption,
    /// Emit per-error records in JSONL output
    pub verbose: bool,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Jsonl,
}

/// When to colorize terminal output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// Translate to a termcolor choice, disabling color for non-terminals
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
            ColorOption::Auto => {
                if std::io::stdout().is_terminal() {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
        }
    }
}

impl Config {
    /// Load configuration from an explicit file path
    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&raw).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.normalize();
        Ok(config)
    }

    /// Search `dir` and its ancestors for a `clangfmt.toml`
    ///
    /// Returns the parsed configuration together with the path it was
    /// loaded from, or `None` when no configuration file exists.
    pub fn discover(dir: &Path) -> Result<Option<(Config, PathBuf)>> {
        for ancestor in dir.ancestors() {
            let candidate = ancestor.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let config = Config::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
        }
        Ok(None)
    }

    /// Resolve the effective configuration for a run
    ///
    /// An explicit `--config` path must exist; otherwise discovery starts
    /// from the current directory and falls back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Config::load(path),
            None => {
                let cwd = std::env::current_dir().map_err(Error::Output)?;
                Ok(Config::discover(&cwd)?
                    .map(|(config, _)| config)
                    .unwrap_or_default())
            }
        }
    }

    /// Fold command-line options over the file-based configuration
    pub fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(style) = &cli.style {
            self.format.style = style.clone();
        }
        if let Some(executable) = &cli.executable {
            self.format.executable = executable.clone();
        }
        if let Some(format) = cli.format {
            self.output.format = format;
        }
        if let Some(color) = cli.color {
            self.output.color = color;
        }
        if cli.verbose {
            self.output.verbose = true;
        }
        self.sources
            .exclude
            .extend(cli.exclude.iter().cloned());
    }

    fn normalize(&mut self) {
        if self.sources.roots.is_empty() {
            self.sources.roots.push(PathBuf::from("."));
        }
        for extension in &mut self.sources.extensions {
            if let Some(stripped) = extension.strip_prefix('.') {
                *extension = stripped.to_string();
            }
        }
    }
}
