//! `gk stash` command.

use anyhow::Result;
use gitkit_core::StashMode;

use crate::commands::utils;
use crate::output;
use crate::services::StashService;

/// Run the stash command.
pub fn run(mode: StashMode) -> Result<()> {
    let (repo, _config) = utils::open_repo_and_config()?;
    let service = StashService::new(&repo);

    match mode {
        StashMode::Push => {
            service.push()?;
            output::success("Stashed changes");
        }
        StashMode::Clear => {
            service.clear()?;
            output::success("Cleared stash and reset working tree");
        }
        StashMode::Apply => {
            service.apply()?;
            output::success("Applied latest stash entry");
        }
        StashMode::Update => {
            service.update()?;
            output::success("Updated latest stash entry");
        }
        StashMode::List => {
            let entries = service.list()?;
            if entries.is_empty() {
                output::info("Stash is empty");
            }
            for entry in &entries {
                output::essential(entry);
            }
        }
    }

    Ok(())
}
