//! Configuration for files-changed
//!
//! The glob pattern list arrives through the hosting environment: the
//! `file-paths` input is exposed as the `INPUT_FILE_PATHS` environment
//! variable, one pattern per line (commas also accepted).

use crate::error::{FilesChangedError, Result};
use std::env;

/// Environment variable carrying the `file-paths` input
pub const FILE_PATHS_VAR: &str = "INPUT_FILE_PATHS";

/// Configuration options for a single run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Ordered list of glob patterns selecting the watched file set
    pub file_paths: Vec<String>,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        let raw = env::var(FILE_PATHS_VAR).unwrap_or_default();
        Self {
            file_paths: parse_file_paths(&raw),
        }
    }

    /// Fail fast when no glob patterns were configured.
    ///
    /// This is the only validation gate and runs before any process
    /// interaction.
    pub fn validate(&self) -> Result<()> {
        if self.file_paths.is_empty() {
            return Err(FilesChangedError::NoFilePaths);
        }
        Ok(())
    }
}

/// Split a raw `file-paths` input into individual glob patterns.
///
/// Patterns are separated by newlines or commas; surrounding whitespace is
/// trimmed and blank entries are dropped.
pub fn parse_file_paths(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_newline_separated() {
        let patterns = parse_file_paths("src/**/*.ts\npackage.json");
        assert_eq!(patterns, vec!["src/**/*.ts", "package.json"]);
    }

    #[test]
    fn test_parse_comma_separated() {
        let patterns = parse_file_paths("src/**/*.ts, package.json");
        assert_eq!(patterns, vec!["src/**/*.ts", "package.json"]);
    }

    #[test]
    fn test_parse_trims_and_drops_blanks() {
        let patterns = parse_file_paths("  src/*.rs  \n\n   \nCargo.toml\n");
        assert_eq!(patterns, vec!["src/*.rs", "Cargo.toml"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_file_paths("").is_empty());
        assert!(parse_file_paths("   \n  \n").is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_config() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "No file paths provided. Please set the file-paths input."
        );
    }

    #[test]
    fn test_validate_accepts_non_empty_config() {
        let config = Config {
            file_paths: vec!["src/**/*.ts".to_string()],
        };
        assert!(config.validate().is_ok());
    }
}
