use anyhow::{Context, Result};
use gitkit_core::Config;
use gitkit_git::Repository;

use crate::output;

/// Helper to open the current repository and its gitkit config.
pub fn open_repo_and_config() -> Result<(Repository, Config)> {
    let mut repo = Repository::open_current().context("Not inside a git repository")?;
    if output::is_verbose() {
        repo = repo.with_echo(output::command);
    }

    let config = Config::load(Config::path_in(repo.git_dir()))
        .context("Failed to load gitkit config")?;

    Ok((repo, config))
}
