//! `gk pull-request` command - Merge the current branch into a target
//! branch and push it.

use anyhow::Result;
use gitkit_core::{BranchRef, StrategySelector};

use crate::commands::utils;
use crate::output;
use crate::services::PullRequestService;

/// Run the pull-request command.
pub fn run(branch: Option<&str>, force: Option<&str>) -> Result<()> {
    let strategy = StrategySelector::parse(force)?;
    let (repo, config) = utils::open_repo_and_config()?;
    let target = BranchRef::or_default(branch, &config.general.default_branch)?;

    output::info(&format!("Merging into {target}..."));
    let result = PullRequestService::new(&repo, &config.general.remote).run(&target, strategy)?;

    output::success(&format!(
        "Merged {} into {} and pushed {}",
        result.source, result.target, result.target
    ));
    Ok(())
}
