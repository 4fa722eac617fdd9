//! Error types for clangfmt
//!
//! All fallible operations in the crate return [`Result`]. Errors carry the
//! path they relate to so that a failure deep in a multi-file run still
//! names the file that caused it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while discovering, checking, or formatting files
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot run '{}': executable not found (is clang-format on PATH?)", .executable.display())]
    ExecutableNotFound { executable: PathBuf },

    #[error("failed to launch '{}': {source}", .executable.display())]
    Spawn {
        executable: PathBuf,
        source: io::Error,
    },

    #[error("clang-format failed on {}: {stderr}", .path.display())]
    Formatter { path: PathBuf, stderr: String },

    #[error("malformed replacements XML for {}: {message}", .path.display())]
    Xml { path: PathBuf, message: String },

    #[error("invalid replacement for {}: {message}", .path.display())]
    Replacement { path: PathBuf, message: String },

    #[error("invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("file walking failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("failed to write output: {0}")]
    Output(io::Error),
}
