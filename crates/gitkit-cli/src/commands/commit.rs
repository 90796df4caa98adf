//! `gk stage-commit` and `gk stage-commit-push` commands.

use anyhow::Result;
use gitkit_core::CommitMessage;

use crate::commands::utils;
use crate::output;
use crate::services::CommitService;

/// Run the stage-commit command.
pub fn run(message: Option<&str>) -> Result<()> {
    let message = CommitMessage::parse(message, "stage-commit")?;
    let (repo, _config) = utils::open_repo_and_config()?;

    CommitService::new(&repo).stage_commit(&message)?;

    output::success(&format!("Committed: {message}"));
    Ok(())
}

/// Run the stage-commit-push command.
pub fn run_push(message: Option<&str>) -> Result<()> {
    let message = CommitMessage::parse(message, "stage-commit-push")?;
    let (repo, config) = utils::open_repo_and_config()?;

    let result = CommitService::new(&repo)
        .stage_commit_push(&message, config.commit.push_after_failed_commit)?;

    match result.commit_error {
        Some(e) => output::warn(&format!("{e:#}; pushed existing commits anyway")),
        None => output::success(&format!("Committed and pushed: {message}")),
    }
    Ok(())
}
