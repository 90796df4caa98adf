//! Validated operation arguments.
//!
//! Each type here is parsed from raw command-line input before any git call
//! is made, so a bad argument never leaves the repository half-modified.

use std::fmt;

use gitkit_git::MergeStrategy;

use crate::error::{Error, Result};

/// A non-empty commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Parse a message for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] when the message is absent or blank.
    pub fn parse(raw: Option<&str>, operation: &'static str) -> Result<Self> {
        match raw {
            Some(msg) if !msg.trim().is_empty() => Ok(Self(msg.to_string())),
            _ => Err(Error::Usage { operation }),
        }
    }

    /// Get the message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side wins when a merge conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategySelector {
    /// Let git stop on conflicts.
    #[default]
    None,
    /// Keep the branch being merged into (`ours`).
    KeepCurrent,
    /// Keep the branch being merged in (`theirs`).
    KeepIncoming,
}

impl StrategySelector {
    /// Parse an optional `ours` / `theirs` value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any other value.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(value) = raw else {
            return Ok(Self::None);
        };

        match value.to_ascii_lowercase().as_str() {
            "ours" => Ok(Self::KeepCurrent),
            "theirs" => Ok(Self::KeepIncoming),
            _ => Err(Error::InvalidArgument {
                name: "strategy",
                value: value.to_string(),
                expected: "expected one of: ours, theirs".into(),
            }),
        }
    }

    /// Parse a strategy that `operation` cannot run without.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] when absent and [`Error::InvalidArgument`]
    /// when not `ours` / `theirs`.
    pub fn parse_required(raw: Option<&str>, operation: &'static str) -> Result<MergeStrategy> {
        Self::parse(raw)?
            .merge_strategy()
            .ok_or(Error::Usage { operation })
    }

    /// The `git merge -X` option this selector maps to.
    #[must_use]
    pub const fn merge_strategy(self) -> Option<MergeStrategy> {
        match self {
            Self::None => None,
            Self::KeepCurrent => Some(MergeStrategy::Ours),
            Self::KeepIncoming => Some(MergeStrategy::Theirs),
        }
    }
}

/// What `stash` should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StashMode {
    /// Stash current changes.
    #[default]
    Push,
    /// Drop every entry and hard-reset the working tree.
    Clear,
    /// Apply the newest entry.
    Apply,
    /// Fold current changes into the newest entry.
    Update,
    /// Show entries.
    List,
}

/// A 1-based position in the rollback commit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollbackIndex(usize);

impl RollbackIndex {
    /// Parse `raw` as a position in a list of `len` commits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] for zero, values past the end, or
    /// anything that is not a number.
    pub fn resolve(raw: &str, len: usize) -> Result<Self> {
        let trimmed = raw.trim();
        let parsed = trimmed
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| trimmed.parse::<usize>().ok())
            .flatten();
        match parsed {
            Some(n) if (1..=len).contains(&n) => Ok(Self(n)),
            _ => Err(Error::InvalidIndex {
                raw: raw.to_string(),
                len,
            }),
        }
    }

    /// The index as shown to the user.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0
    }

    /// The 0-based offset into the commit list.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.0 - 1
    }
}
