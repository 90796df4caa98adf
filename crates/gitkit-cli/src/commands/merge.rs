//! `gk merge` and `gk merge-force` commands.

use anyhow::Result;
use gitkit_core::{BranchRef, Error, StrategySelector};

use crate::commands::utils;
use crate::output;
use crate::services::MergeService;

/// Run the merge command.
pub fn run(target: Option<&str>, abort: bool) -> Result<()> {
    let (repo, config) = utils::open_repo_and_config()?;
    let service = MergeService::new(&repo, &config.general.remote);

    if abort {
        service.abort()?;
        output::success("Merge aborted");
        return Ok(());
    }

    let target = BranchRef::or_default(target, &config.general.default_branch)?;
    let merged = service.merge(&target)?;

    output::success(&format!("Merged {merged}"));
    Ok(())
}

/// Run the merge-force command.
pub fn run_force(branch: Option<&str>, strategy: Option<&str>) -> Result<()> {
    let branch = branch.ok_or(Error::Usage {
        operation: "merge-force",
    })?;
    let branch = BranchRef::new(branch)?;
    let strategy = StrategySelector::parse_required(strategy, "merge-force")?;

    let (repo, config) = utils::open_repo_and_config()?;
    let merged = MergeService::new(&repo, &config.general.remote).merge_force(&branch, strategy)?;

    output::success(&format!("Merged {merged} with -X {strategy}"));
    Ok(())
}
