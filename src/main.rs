//! files-changed - detects whether watched files changed vs a base branch
//!
//! Single-shot CI helper: resolves the base branch from the pull-request
//! event, fetches it, expands the configured glob patterns, lists the files
//! changed against the fetched head, and publishes a `files_changed` boolean
//! output.

mod config;
mod error;
mod event;
mod git;
mod matcher;
mod output;
mod runner;

use config::Config;
use event::EventPayload;
use git::GitCli;
use matcher::GlobMatcher;
use output::GithubOutput;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::from_env();

    let payload = match EventPayload::from_env() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut sink = GithubOutput::from_env();
    let stdout = io::stdout();
    let mut log = stdout.lock();

    let result = runner::run(&config, &payload, &GitCli, &GlobMatcher, &mut sink, &mut log);

    if let Err(e) = log.flush() {
        eprintln!("Error: {}", e);
        return ExitCode::from(2);
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
