//! Git integration
//!
//! Shells out to git for the two version-control operations this tool needs:
//! fetching the base branch and listing the paths that differ between the
//! fetched head and the current `HEAD`.

use crate::error::{FilesChangedError, Result};
use std::process::{Command, Stdio};

/// Narrow version-control seam so tests can substitute canned output
/// without spawning real processes.
pub trait Vcs {
    /// Fetch the given branch from the `origin` remote
    fn fetch_branch(&self, branch: &str) -> Result<()>;

    /// List the paths that differ between `FETCH_HEAD` and `HEAD`
    fn changed_files(&self) -> Result<Vec<String>>;
}

/// Production implementation backed by the `git` command-line tool
pub struct GitCli;

impl Vcs for GitCli {
    fn fetch_branch(&self, branch: &str) -> Result<()> {
        // Streams are inherited so fetch progress is visible live
        let status = Command::new("git")
            .args(["fetch", "origin", branch])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| FilesChangedError::GitError(format!("Failed to run git fetch: {}", e)))?;

        if !status.success() {
            return Err(FilesChangedError::GitError(format!(
                "git fetch origin {} failed with {}",
                branch, status
            )));
        }

        Ok(())
    }

    fn changed_files(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(["diff", "--name-only", "FETCH_HEAD", "HEAD"])
            .output()
            .map_err(|e| FilesChangedError::GitError(format!("Failed to run git diff: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FilesChangedError::GitError(format!(
                "git diff --name-only failed: {}",
                stderr
            )));
        }

        Ok(parse_name_only(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Split `git diff --name-only` output into a path list.
///
/// The output is trimmed of surrounding whitespace and split on newlines;
/// individual lines are kept verbatim. Empty output yields an empty list
/// rather than a list containing one empty string.
pub fn parse_name_only(output: &str) -> Vec<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_name_only("").is_empty());
    }

    #[test]
    fn test_parse_whitespace_only_output() {
        assert!(parse_name_only("  \n \n").is_empty());
    }

    #[test]
    fn test_parse_two_paths() {
        assert_eq!(parse_name_only("a.ts\nb.ts"), vec!["a.ts", "b.ts"]);
    }

    #[test]
    fn test_parse_trims_trailing_newline() {
        assert_eq!(
            parse_name_only("src/lib.rs\nsrc/main.rs\n"),
            vec!["src/lib.rs", "src/main.rs"]
        );
    }

    #[test]
    fn test_parse_keeps_lines_verbatim() {
        // No per-line trimming or path normalization
        assert_eq!(
            parse_name_only("dir with space/file.ts\n./odd.ts"),
            vec!["dir with space/file.ts", "./odd.ts"]
        );
    }
}
