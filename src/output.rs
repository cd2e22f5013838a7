//! Output publication
//!
//! Publishes the `files_changed` boolean through the environment-provided
//! output channel: the file named by `GITHUB_OUTPUT`, or the legacy
//! `::set-output` workflow command on stdout when that variable is unset.

use crate::error::Result;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable naming the output file
pub const OUTPUT_PATH_VAR: &str = "GITHUB_OUTPUT";

/// Seam for publishing named outputs, so tests can record them in memory.
pub trait OutputSink {
    /// Publish a single named output value
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Production sink writing to the environment-provided output channel
pub struct GithubOutput {
    path: Option<PathBuf>,
}

impl GithubOutput {
    /// Build the sink from the process environment
    pub fn from_env() -> Self {
        Self {
            path: env::var(OUTPUT_PATH_VAR).ok().map(PathBuf::from),
        }
    }

    #[cfg(test)]
    fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl OutputSink for GithubOutput {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", name, value)?;
            }
            None => {
                // Legacy workflow command for runners without GITHUB_OUTPUT
                println!("::set-output name={}::{}", name, value);
            }
        }
        Ok(())
    }
}
