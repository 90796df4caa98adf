//! `gk rollback` command - List recent commits or hard-reset to one.

use anyhow::Result;
use chrono::{DateTime, Utc};
use gitkit_core::Error;
use serde::Serialize;

use crate::commands::utils;
use crate::output;
use crate::services::RollbackService;

/// JSON output for one listed commit.
#[derive(Debug, Serialize)]
struct RollbackEntry<'a> {
    index: usize,
    id: &'a str,
    short_id: &'a str,
    summary: &'a str,
    time: DateTime<Utc>,
}

/// Run the rollback command.
pub fn run(list: bool, commit: Option<&str>, json: bool) -> Result<()> {
    if !list && commit.is_none() {
        return Err(Error::Usage {
            operation: "rollback",
        }
        .into());
    }

    let (repo, config) = utils::open_repo_and_config()?;
    let service = RollbackService::new(&repo, config.rollback.depth);

    if let Some(raw_index) = commit {
        let (index, target) = service.rollback_to(raw_index)?;
        output::success(&format!(
            "Rolled back to #{} {}",
            index.position(),
            target.oneline()
        ));
        return Ok(());
    }

    let commits = service.list()?;
    if json {
        let entries: Vec<RollbackEntry<'_>> = commits
            .iter()
            .enumerate()
            .map(|(i, c)| RollbackEntry {
                index: i + 1,
                id: &c.id,
                short_id: &c.short_id,
                summary: &c.summary,
                time: c.time,
            })
            .collect();
        output::essential(&serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (i, c) in commits.iter().enumerate() {
        output::essential(&output::indexed_commit(i + 1, c));
    }
    if !commits.is_empty() {
        output::detail("");
        output::detail("Run `gk rollback --commit <INDEX>` to hard-reset to a commit.");
    }
    Ok(())
}
