//! Run orchestration
//!
//! Sequences a single detection run: validate the configuration, resolve and
//! fetch the base branch, gather the matched and changed file lists,
//! intersect them, log the results, and publish the `files_changed` output.
//!
//! The log transcript is part of the observable contract, including the two
//! `files_changed:` lines near the end: the first reports whether the
//! changed-file list is non-empty, the second (and the published output)
//! whether the intersection is non-empty. Consumers read both, so they are
//! kept as separate signals.

use crate::config::Config;
use crate::error::Result;
use crate::event::{self, EventPayload};
use crate::git::Vcs;
use crate::matcher::PathMatcher;
use crate::output::OutputSink;
use std::collections::HashSet;
use std::io::Write;

/// Ordered sub-sequence of `matched` whose entries also appear in `changed`,
/// compared by exact string equality. Preserves the order and duplicates of
/// `matched`.
pub fn find_matching_files(matched: &[String], changed: &[String]) -> Vec<String> {
    let changed_set: HashSet<&str> = changed.iter().map(String::as_str).collect();
    matched
        .iter()
        .filter(|file| changed_set.contains(file.as_str()))
        .cloned()
        .collect()
}

/// Log the changed-file list and the intersection under their fixed headers
fn log_results<W: Write>(
    changed_files: &[String],
    matching_files: &[String],
    log: &mut W,
) -> Result<()> {
    writeln!(log, "Files changed")?;
    for file in changed_files {
        writeln!(log, "{}", file)?;
    }

    if matching_files.is_empty() {
        writeln!(log, "\nNo matching files found.")?;
    } else {
        writeln!(log, "\nFound {} matching files:", matching_files.len())?;
        for file in matching_files {
            writeln!(log, "{}", file)?;
        }
    }

    writeln!(log, "files_changed: {}", !changed_files.is_empty())?;
    Ok(())
}

/// Run a single detection pass.
///
/// Returns the published boolean: whether any changed file fell within the
/// configured glob selection. Any failure is fatal; nothing is published
/// after an error.
pub fn run<W: Write>(
    config: &Config,
    payload: &EventPayload,
    vcs: &dyn Vcs,
    matcher: &dyn PathMatcher,
    sink: &mut dyn OutputSink,
    log: &mut W,
) -> Result<bool> {
    config.validate()?;

    let base_branch = event::base_branch(payload);
    writeln!(log, "Comparing changes with base branch: {}", base_branch)?;

    writeln!(log, "Fetching {} branch...", base_branch)?;
    vcs.fetch_branch(&base_branch)?;

    let matched_files = matcher.matched_files(&config.file_paths)?;
    let changed_files = vcs.changed_files()?;
    let matching_files = find_matching_files(&matched_files, &changed_files);

    log_results(&changed_files, &matching_files, log)?;

    let has_changes = !matching_files.is_empty();
    writeln!(log, "files_changed: {}", has_changes)?;

    sink.set_output("files_changed", if has_changes { "true" } else { "false" })?;
    Ok(has_changes)
}
