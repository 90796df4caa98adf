//! `gk branch-checkout-or-create` command.

use anyhow::Result;
use gitkit_core::{BranchRef, Error};

use crate::commands::utils;
use crate::output;
use crate::services::{BranchService, CheckoutOutcome};

/// Run the branch-checkout-or-create command.
pub fn run(branch: Option<&str>) -> Result<()> {
    let name = branch.ok_or(Error::Usage {
        operation: "branch-checkout-or-create",
    })?;
    let name = BranchRef::new(name)?;

    let (repo, config) = utils::open_repo_and_config()?;
    let remote = &config.general.remote;
    let outcome = BranchService::new(&repo, remote).checkout_or_create(&name)?;

    match outcome {
        CheckoutOutcome::Local => output::success(&format!("Switched to {name}")),
        CheckoutOutcome::Tracking => {
            output::success(&format!("Switched to {name} tracking {remote}/{name}"));
        }
        CheckoutOutcome::Created => {
            output::success(&format!("Created {name} and pushed it to {remote}"));
        }
    }
    Ok(())
}
