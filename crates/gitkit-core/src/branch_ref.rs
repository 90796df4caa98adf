//! Branch name validation and newtype.
//!
//! A [`BranchRef`] is only a name. Nothing here checks that the branch
//! exists; callers either query the repository or let git fail.

use std::fmt;

use crate::error::Error;

/// Shell metacharacters rejected on top of git's own rules.
const SHELL_METACHARACTERS: &[char] = &[
    '$', ';', '|', '&', '>', '<', '`', '\\', '"', '\'', '(', ')', '{', '}', '!',
];

/// A validated local branch name such as `main` or `feature/login`.
///
/// # Examples
///
/// ```
/// use gitkit_core::BranchRef;
///
/// let branch = BranchRef::new("develop").unwrap();
/// assert_eq!(branch.remote_ref("origin"), "origin/develop");
///
/// assert!(BranchRef::new("../etc/passwd").is_err());
/// assert!(BranchRef::new("name;rm -rf").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchRef(String);

impl BranchRef {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the name violates git's
    /// ref naming rules or contains shell metacharacters.
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        match rejection(&name) {
            Some(expected) => Err(Error::InvalidArgument {
                name: "branch",
                value: name,
                expected,
            }),
            None => Ok(Self(name)),
        }
    }

    /// Use `explicit` if given, otherwise `fallback`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the chosen name is invalid.
    pub fn or_default(explicit: Option<&str>, fallback: &str) -> Result<Self, Error> {
        Self::new(explicit.unwrap_or(fallback))
    }

    /// Get the branch name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The remote-tracking name of this branch, e.g. `origin/main`.
    #[must_use]
    pub fn remote_ref(&self, remote: &str) -> String {
        format!("{remote}/{}", self.0)
    }
}

impl fmt::Display for BranchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for BranchRef {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Why `name` is not an acceptable branch name, if it isn't.
fn rejection(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("branch name cannot be empty".into());
    }
    if name == "@" {
        return Some("branch name cannot be '@'".into());
    }
    if name.starts_with('.') || name.ends_with('.') {
        return Some("branch name cannot start or end with '.'".into());
    }
    if name.starts_with('-') {
        return Some("branch name cannot start with '-'".into());
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Some("branch name cannot start or end with '/'".into());
    }
    #[allow(clippy::case_sensitive_file_extension_comparisons)]
    if name.ends_with(".lock") {
        return Some("branch name cannot end with '.lock'".into());
    }

    for pattern in ["..", "//", "@{", "/."] {
        if name.contains(pattern) {
            return Some(format!("branch name cannot contain '{pattern}'"));
        }
    }

    name.chars().find_map(|c| {
        if c.is_ascii_control() {
            Some("branch name cannot contain control characters".into())
        } else if matches!(c, ' ' | '~' | '^' | ':' | '?' | '*' | '[') {
            Some(format!("branch name cannot contain '{c}'"))
        } else if SHELL_METACHARACTERS.contains(&c) {
            Some(format!("branch name cannot contain shell metacharacter '{c}'"))
        } else {
            None
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rejected(name: &str) -> bool {
        matches!(BranchRef::new(name), Err(Error::InvalidArgument { .. }))
    }

    #[test]
    fn test_valid_names() {
        for name in [
            "main",
            "develop",
            "release",
            "feature/auth",
            "fix/bug-123",
            "my_feature",
            "v1.0.0",
            "user@feature",
        ] {
            assert!(BranchRef::new(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_structural_rules() {
        for name in [
            "",
            "@",
            ".hidden",
            "branch.",
            "-rf",
            "/branch",
            "branch/",
            "branch.lock",
            "branch..name",
            "../etc/passwd",
            "feature//auth",
            "feature/.hidden",
            "branch@{1}",
        ] {
            assert!(rejected(name), "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_forbidden_characters() {
        for c in [' ', '~', '^', ':', '?', '*', '[', '\t', '\n'] {
            assert!(rejected(&format!("branch{c}name")), "char: {c:?}");
        }
        for c in SHELL_METACHARACTERS {
            assert!(rejected(&format!("branch{c}name")), "char: {c}");
        }
    }

    #[test]
    fn test_or_default() {
        assert_eq!(BranchRef::or_default(None, "main").unwrap(), "main");
        assert_eq!(
            BranchRef::or_default(Some("release"), "main").unwrap(),
            "release"
        );
        assert!(BranchRef::or_default(Some(""), "main").is_err());
    }

    #[test]
    fn test_remote_ref_and_display() {
        let branch = BranchRef::new("feature/auth").unwrap();
        assert_eq!(branch.remote_ref("origin"), "origin/feature/auth");
        assert_eq!(branch.to_string(), "feature/auth");
        assert_eq!(branch.as_str(), "feature/auth");
    }
}
