//! Error types for gitkit-core.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can end a gitkit operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument is missing; the caller should show usage.
    #[error("missing required argument for `{operation}`")]
    Usage {
        /// Operation whose usage should be printed.
        operation: &'static str,
    },

    /// An argument was given but its value is not acceptable.
    #[error("invalid {name} '{value}': {expected}")]
    InvalidArgument {
        /// Which argument.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// What would have been accepted.
        expected: String,
    },

    /// pull-request was asked to merge a branch into itself.
    #[error("already on '{0}' - checkout the branch you want to merge first")]
    AlreadyTarget(String),

    /// rollback index is not a position in the listed history.
    #[error("invalid commit index '{raw}' - expected a number between 1 and {len}")]
    InvalidIndex {
        /// The index as typed.
        raw: String,
        /// Number of commits in the list.
        len: usize,
    },

    /// Config file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The git tool or repository failed.
    #[error(transparent)]
    Git(#[from] gitkit_git::Error),
}

impl Error {
    /// Exit code the process should end with for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 0,
            Self::Git(e) => match e.exit_code() {
                Some(code) => code,
                None => 1,
            },
            _ => 1,
        }
    }
}
