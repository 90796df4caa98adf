//! Error types for gitkit-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during git operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository")]
    NotARepository,

    /// Bare repositories have no working tree to operate on.
    #[error("cannot run in a bare repository")]
    BareRepository,

    /// HEAD is detached (not on a branch).
    #[error("HEAD is detached - checkout a branch first")]
    DetachedHead,

    /// The git executable ran and exited unsuccessfully.
    #[error("`{command}` failed{}", exit_suffix(.code))]
    CommandFailed {
        /// The command line that was issued.
        command: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },

    /// The git executable could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

impl Error {
    /// Exit code of a failed git invocation, if any.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn exit_suffix(code: &Option<i32>) -> String {
    code.map_or_else(
        || " (terminated by signal)".to_string(),
        |c| format!(" with exit code {c}"),
    )
}
