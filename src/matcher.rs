//! Glob pattern expansion
//!
//! Expands the configured glob patterns against the current working directory
//! into repository-relative paths of existing regular files.

use crate::error::{FilesChangedError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Seam for expanding glob patterns to existing file paths, so tests can
/// substitute a fixed file list.
pub trait PathMatcher {
    /// Expand the patterns into an ordered list of matching file paths
    fn matched_files(&self, patterns: &[String]) -> Result<Vec<String>>;
}

/// Production matcher backed by the `glob` crate
pub struct GlobMatcher;

impl PathMatcher for GlobMatcher {
    fn matched_files(&self, patterns: &[String]) -> Result<Vec<String>> {
        let mut matched = Vec::new();
        let mut seen = HashSet::new();

        for pattern in patterns {
            let paths = glob::glob(pattern).map_err(|e| FilesChangedError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;

            // Directories are excluded; unreadable entries are skipped
            for path in paths.filter_map(|entry| entry.ok()) {
                if !path.is_file() {
                    continue;
                }
                let relative = to_forward_slashes(&path);
                if seen.insert(relative.clone()) {
                    matched.push(relative);
                }
            }
        }

        Ok(matched)
    }
}

/// Render a path with forward-slash separators, matching git's path output
fn to_forward_slashes(path: &Path) -> String {
    path.iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
