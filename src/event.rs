//! Pull-request event context
//!
//! The hosting environment writes the triggering event as JSON to the file
//! named by `GITHUB_EVENT_PATH`. Only `pull_request.base.ref` is consulted;
//! everything else in the payload is ignored.

use crate::error::{FilesChangedError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable pointing at the event payload file
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

/// Branch compared against when no pull-request context is available
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// The parts of the event payload this tool consumes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    pub pull_request: Option<PullRequest>,
}

/// Pull-request section of the event payload; all other fields are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    pub base: Option<BaseRef>,
}

/// Base branch reference of a pull request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BaseRef {
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}

impl EventPayload {
    /// Load the event payload from the process environment.
    ///
    /// An unset `GITHUB_EVENT_PATH` means the run was not triggered by an
    /// event and yields an empty payload. A path that exists but cannot be
    /// read or parsed is an error.
    pub fn from_env() -> Result<Self> {
        match env::var(EVENT_PATH_VAR) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse an event payload from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            FilesChangedError::InvalidEvent(format!("cannot read '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            FilesChangedError::InvalidEvent(format!("cannot parse '{}': {}", path.display(), e))
        })
    }
}

/// Resolve the base branch to compare against.
///
/// Returns the pull request's base ref when present and non-empty, otherwise
/// the fixed default `main`. Total function.
pub fn base_branch(payload: &EventPayload) -> String {
    payload
        .pull_request
        .as_ref()
        .and_then(|pr| pr.base.as_ref())
        .and_then(|base| base.git_ref.as_deref())
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_BASE_BRANCH)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_from(json: &str) -> EventPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_base_branch_from_pull_request() {
        let payload = payload_from(
            r#"{"pull_request": {"base": {"ref": "develop"}, "number": 123}}"#,
        );
        assert_eq!(base_branch(&payload), "develop");
    }

    #[test]
    fn test_base_branch_defaults_without_pull_request() {
        let payload = EventPayload::default();
        assert_eq!(base_branch(&payload), "main");
    }

    #[test]
    fn test_base_branch_defaults_without_base() {
        let payload = payload_from(r#"{"pull_request": {"number": 123}}"#);
        assert_eq!(base_branch(&payload), "main");
    }

    #[test]
    fn test_base_branch_defaults_without_ref() {
        let payload = payload_from(r#"{"pull_request": {"base": {}}}"#);
        assert_eq!(base_branch(&payload), "main");
    }

    #[test]
    fn test_base_branch_defaults_on_empty_ref() {
        let payload = payload_from(r#"{"pull_request": {"base": {"ref": ""}}}"#);
        assert_eq!(base_branch(&payload), "main");
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let payload = payload_from(
            r#"{"action": "opened", "pull_request": {"base": {"ref": "main", "sha": "abc"}, "head": {}}}"#,
        );
        assert_eq!(base_branch(&payload), "main");
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let err = EventPayload::from_file(Path::new("/nonexistent/event.json")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid event payload:"));
    }
}
