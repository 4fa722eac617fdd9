//! clang-format subprocess invocation
//!
//! The formatter is invoked once per file with `-output-replacements-xml`;
//! the file's own directory is used as the working directory so that
//! `-style=file` resolves the nearest `.clang-format`.

use crate::error::{Error, Result};
use crate::formatter::replacements::ReplacementSet;
use regex::Regex;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

/// Handle to a clang-format executable with a fixed style
#[derive(Debug, Clone)]
pub struct ClangFormat {
    executable: PathBuf,
    style: String,
}

/// clang-format version triple scraped from `--version` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl ClangFormat {
    pub fn new(executable: PathBuf, style: String) -> ClangFormat {
        ClangFormat { executable, style }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Verify the executable can be launched and scrape its version
    ///
    /// Some clang-format builds exit non-zero on `--version`, so only a
    /// failure to launch is treated as an error.
    pub fn probe(&self) -> Result<Option<Version>> {
        let output = Command::new(&self.executable)
            .arg("--version")
            .output()
            .map_err(|source| self.spawn_error(source))?;
        Ok(parse_version(&String::from_utf8_lossy(&output.stdout)))
    }

    /// Run the formatter on one file and parse its replacement report
    pub fn replacements(&self, path: &Path) -> Result<ReplacementSet> {
        let file_name = path
            .file_name()
            .ok_or_else(|| Error::NotFound(path.to_path_buf()))?;

        let mut command = Command::new(&self.executable);
        command
            .arg(format!("-style={}", self.style))
            .arg("-output-replacements-xml")
            .arg(file_name);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            command.current_dir(parent);
        }

        let output = command
            .output()
            .map_err(|source| self.spawn_error(source))?;
        if !output.status.success() {
            return Err(Error::Formatter {
                path: path.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        ReplacementSet::parse(path, &String::from_utf8_lossy(&output.stdout))
    }

    fn spawn_error(&self, source: io::Error) -> Error {
        if source.kind() == io::ErrorKind::NotFound {
            Error::ExecutableNotFound {
                executable: self.executable.clone(),
            }
        } else {
            Error::Spawn {
                executable: self.executable.clone(),
                source,
            }
        }
    }
}

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"version\s+(\d+)\.(\d+)\.(\d+)").expect("valid regex"))
}

fn parse_version(stdout: &str) -> Option<Version> {
    let captures = version_regex().captures(stdout)?;
    Some(Version {
        major: captures[1].parse().ok()?,
        minor: captures[2].parse().ok()?,
        patch: captures[3].parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_plain() {
        let version = parse_version("clang-format version 14.0.6\n").unwrap();
        assert_eq!(
            version,
            Version {
                major: 14,
                minor: 0,
                patch: 6
            }
        );
        assert_eq!(version.to_string(), "14.0.6");
    }

    #[test]
    fn test_parse_version_vendor_prefix() {
        let version =
            parse_version("Ubuntu clang-format version 18.1.3 (1ubuntu1)\n").unwrap();
        assert_eq!(version.major, 18);
        assert_eq!(version.minor, 1);
        assert_eq!(version.patch, 3);
    }

    #[test]
    fn test_parse_version_garbage_is_none() {
        assert!(parse_version("not a formatter\n").is_none());
        assert!(parse_version("").is_none());
    }

    #[test]
    fn test_probe_missing_executable() {
        let runner = ClangFormat::new(
            PathBuf::from("/nonexistent/clang-format-xyz"),
            "file".to_string(),
        );
        let err = runner.probe().unwrap_err();
        assert!(matches!(err, Error::ExecutableNotFound { .. }));
    }

    #[test]
    fn test_replacements_missing_executable() {
        let runner = ClangFormat::new(
            PathBuf::from("/nonexistent/clang-format-xyz"),
            "file".to_string(),
        );
        let err = runner.replacements(Path::new("main.c")).unwrap_err();
        assert!(matches!(err, Error::ExecutableNotFound { .. }));
    }

    #[test]
    fn test_replacements_rejects_pathless_input() {
        let runner = ClangFormat::new(PathBuf::from("clang-format"), "file".to_string());
        let err = runner.replacements(Path::new("..")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
