#![forbid(unsafe_code)]

//! Source file discovery
//!
//! Inputs can be explicit files (taken as-is), directories (walked
//! recursively, filtered by the configured extensions), or glob patterns.
//! Exclude patterns from the configuration and the command line are
//! applied to everything. The result is sorted and deduplicated so that
//! reports are deterministic.

use crate::config::Config;
use crate::error::{Error, Result};
use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collect the files to check or format
///
/// When `paths` is empty the configured source roots are used instead.
pub fn collect_source_files(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let exclude = build_exclude_set(&config.sources.exclude)?;
    let requested: &[PathBuf] = if paths.is_empty() {
        &config.sources.roots
    } else {
        paths
    };

    let mut files = Vec::new();
    for path in requested {
        let text = path.to_string_lossy();
        if is_glob_pattern(&text) {
            collect_glob_matches(&text, &exclude, &mut files)?;
        } else if path.is_dir() {
            collect_from_directory(path, &config.sources.extensions, &exclude, &mut files)?;
        } else if path.is_file() {
            // Explicit files are taken regardless of extension
            if !is_excluded(&exclude, path) {
                files.push(path.clone());
            }
        } else {
            return Err(Error::NotFound(path.clone()));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn collect_from_directory(
    dir: &Path,
    extensions: &[String],
    exclude: &GlobSet,
    out: &mut Vec<PathBuf>,
) -> Result<()> {
    let mut builder = WalkBuilder::new(dir);
    builder.follow_links(false);
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if matches_extension(path, extensions) && !is_excluded(exclude, path) {
            out.push(path.to_path_buf());
        }
    }
    Ok(())
}

fn collect_glob_matches(pattern: &str, exclude: &GlobSet, out: &mut Vec<PathBuf>) -> Result<()> {
    let matcher: GlobMatcher = Glob::new(pattern)?.compile_matcher();
    let root = literal_prefix(pattern);
    let walk_root: &Path = if root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        &root
    };

    let mut builder = WalkBuilder::new(walk_root);
    builder.follow_links(false);
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let candidate = path.strip_prefix("./").unwrap_or(path);
        if matcher.is_match(candidate) && !is_excluded(exclude, candidate) {
            out.push(candidate.to_path_buf());
        }
    }
    Ok(())
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Exclude patterns match against the whole path or the file name alone
fn is_excluded(exclude: &GlobSet, path: &Path) -> bool {
    if exclude.is_empty() {
        return false;
    }
    exclude.is_match(path)
        || path
            .file_name()
            .is_some_and(|name| exclude.is_match(Path::new(name)))
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

fn is_glob_pattern(text: &str) -> bool {
    text.contains(['*', '?', '['])
}

/// The leading components of a pattern before any glob metacharacter,
/// used as the walk root so `/abs/dir/*.c` does not scan the world
fn literal_prefix(pattern: &str) -> PathBuf {
    let mut prefix = PathBuf::new();
    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if is_glob_pattern(&text) {
            break;
        }
        prefix.push(component);
    }
    // The last literal component may be a file name, not a directory
    if prefix.is_file() {
        prefix.pop();
    }
    prefix
}
