//! Configuration management for gitkit.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// gitkit configuration loaded from `.git/gitkit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// rollback settings.
    #[serde(default)]
    pub rollback: RollbackConfig,

    /// stage-commit / stage-commit-push settings.
    #[serde(default)]
    pub commit: CommitConfig,
}

impl Config {
    /// Location of the config file inside a repository's git directory.
    #[must_use]
    pub fn path_in(git_dir: &Path) -> PathBuf {
        git_dir.join("gitkit").join("config.toml")
    }

    /// Load config from a TOML file.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a TOML file, creating parent directories.
    ///
    /// # Errors
    /// Returns error if serialization or write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| std::io::Error::other(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General gitkit settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Target branch for merge and pull-request when none is given.
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Remote used for fetch, push and `<remote>/<branch>` refs.
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_branch: default_branch(),
            remote: default_remote(),
        }
    }
}

/// rollback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollbackConfig {
    /// Number of commits listed and addressable by index.
    #[serde(default = "default_rollback_depth")]
    pub depth: usize,
}

impl Default for RollbackConfig {
    fn default() -> Self {
        Self {
            depth: default_rollback_depth(),
        }
    }
}

/// Commit settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitConfig {
    /// Push in stage-commit-push even when the commit step failed.
    #[serde(default)]
    pub push_after_failed_commit: bool,
}

fn default_branch() -> String {
    "main".into()
}

fn default_remote() -> String {
    "origin".into()
}

const fn default_rollback_depth() -> usize {
    20
}
