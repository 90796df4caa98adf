//! `gk reset` command.

use anyhow::Result;
use gitkit_core::BranchRef;
use gitkit_git::ResetMode;

use crate::commands::utils;
use crate::output;
use crate::services::ResetService;

/// Run the reset command.
pub fn run(origin: bool, hard: bool, branch: Option<&str>) -> Result<()> {
    let branch = branch.map(BranchRef::new).transpose()?;
    let mode = if hard { ResetMode::Hard } else { ResetMode::Soft };

    let (repo, config) = utils::open_repo_and_config()?;
    let target =
        ResetService::new(&repo, &config.general.remote).reset(branch.as_ref(), origin, mode)?;

    output::success(&format!("Reset ({}) to {target}", mode.as_flag()));
    Ok(())
}
