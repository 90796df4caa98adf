//! Mock implementations for testing services.
//!
//! `MockGitOps` implements the `GitOps` trait from gitkit-git entirely in
//! memory. Every mutating call is appended to a call log in git's own
//! argument order, so tests can assert on the exact sequence a service
//! issued.

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use gitkit_git::{CommitSummary, GitOps, MergeStrategy, ResetMode, Result as GitResult};

/// Mock implementation of `GitOps` for testing.
pub struct MockGitOps {
    pub current_branch: RefCell<String>,
    pub local_branches: RefCell<HashSet<String>>,
    pub remote_branches: RefCell<HashSet<String>>,
    pub commits: RefCell<Vec<CommitSummary>>,
    pub stashes: RefCell<Vec<String>>,
    pub failures: RefCell<HashSet<String>>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for MockGitOps {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitOps {
    pub fn new() -> Self {
        let mut local = HashSet::new();
        local.insert("main".to_string());

        Self {
            current_branch: RefCell::new("main".to_string()),
            local_branches: RefCell::new(local),
            remote_branches: RefCell::new(HashSet::new()),
            commits: RefCell::new(Vec::new()),
            stashes: RefCell::new(Vec::new()),
            failures: RefCell::new(HashSet::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_current_branch(self, name: &str) -> Self {
        *self.current_branch.borrow_mut() = name.to_string();
        self.local_branches.borrow_mut().insert(name.to_string());
        self
    }

    pub fn with_local_branch(self, name: &str) -> Self {
        self.local_branches.borrow_mut().insert(name.to_string());
        self
    }

    /// Add `origin/<name>`.
    pub fn with_remote_branch(self, name: &str) -> Self {
        self.remote_branches
            .borrow_mut()
            .insert(format!("origin/{name}"));
        self
    }

    /// Seed the log with `count` commits, newest first (`c1` is HEAD).
    pub fn with_commits(self, count: usize) -> Self {
        let commits = (1..=count)
            .map(|i| CommitSummary {
                id: format!("{i:0>40}"),
                short_id: format!("{i:0>7}"),
                summary: format!("Commit {i}"),
                time: DateTime::<Utc>::default(),
            })
            .collect();
        *self.commits.borrow_mut() = commits;
        self
    }

    pub fn with_stashes(self, count: usize) -> Self {
        *self.stashes.borrow_mut() = (0..count)
            .map(|i| format!("stash@{{{i}}}: WIP on main"))
            .collect();
        self
    }

    /// Make a call fail. `call` matches either the full recorded call
    /// (`"checkout release"`) or just its verb (`"merge"`).
    pub fn with_failure(self, call: &str) -> Self {
        self.failures.borrow_mut().insert(call.to_string());
        self
    }

    /// Calls issued so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether any issued call starts with `verb`.
    pub fn called(&self, verb: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(verb))
    }

    fn record(&self, call: String) -> GitResult<()> {
        let fails = {
            let failures = self.failures.borrow();
            let verb = call.split(' ').next().unwrap_or_default();
            failures.contains(&call) || failures.contains(verb)
        };
        let command = format!("git {call}");
        self.calls.borrow_mut().push(call);

        if fails {
            Err(gitkit_git::Error::CommandFailed {
                command,
                code: Some(1),
            })
        } else {
            Ok(())
        }
    }
}

impl GitOps for MockGitOps {
    fn current_branch(&self) -> GitResult<String> {
        Ok(self.current_branch.borrow().clone())
    }

    fn local_branch_exists(&self, name: &str) -> bool {
        self.local_branches.borrow().contains(name)
    }

    fn remote_branch_exists(&self, remote: &str, name: &str) -> bool {
        self.remote_branches
            .borrow()
            .contains(&format!("{remote}/{name}"))
    }

    fn recent_commits(&self, limit: usize) -> GitResult<Vec<CommitSummary>> {
        Ok(self.commits.borrow().iter().take(limit).cloned().collect())
    }

    fn stage_all(&self) -> GitResult<()> {
        self.record("add --all".into())
    }

    fn commit(&self, message: &str) -> GitResult<()> {
        self.record(format!("commit {message}"))
    }

    fn reset(&self, reference: &str, mode: ResetMode) -> GitResult<()> {
        self.record(format!("reset {} {reference}", mode.as_flag()))
    }

    fn checkout(&self, branch: &str) -> GitResult<()> {
        self.record(format!("checkout {branch}"))?;
        *self.current_branch.borrow_mut() = branch.to_string();
        Ok(())
    }

    fn checkout_tracking(&self, remote: &str, branch: &str) -> GitResult<()> {
        self.record(format!("checkout --track {remote}/{branch}"))?;
        self.local_branches.borrow_mut().insert(branch.to_string());
        *self.current_branch.borrow_mut() = branch.to_string();
        Ok(())
    }

    fn checkout_new(&self, branch: &str) -> GitResult<()> {
        self.record(format!("checkout -b {branch}"))?;
        self.local_branches.borrow_mut().insert(branch.to_string());
        *self.current_branch.borrow_mut() = branch.to_string();
        Ok(())
    }

    fn merge(&self, reference: &str, strategy: Option<MergeStrategy>) -> GitResult<()> {
        match strategy {
            Some(s) => self.record(format!("merge -X {s} {reference}")),
            None => self.record(format!("merge {reference}")),
        }
    }

    fn merge_abort(&self) -> GitResult<()> {
        self.record("merge --abort".into())
    }

    fn fetch_all(&self) -> GitResult<()> {
        self.record("fetch --all".into())
    }

    fn fetch(&self, remote: &str, branch: &str) -> GitResult<()> {
        self.record(format!("fetch {remote} {branch}"))
    }

    fn pull_current(&self) -> GitResult<()> {
        self.record("pull".into())
    }

    fn pull(&self, remote: &str, branch: &str) -> GitResult<()> {
        self.record(format!("pull {remote} {branch}"))
    }

    fn push_current(&self) -> GitResult<()> {
        self.record("push".into())
    }

    fn push(&self, remote: &str, branch: &str, set_upstream: bool) -> GitResult<()> {
        if set_upstream {
            self.record(format!("push --set-upstream {remote} {branch}"))
        } else {
            self.record(format!("push {remote} {branch}"))
        }
    }

    fn stash_push(&self) -> GitResult<()> {
        self.record("stash".into())?;
        self.stashes
            .borrow_mut()
            .insert(0, "stash@{0}: WIP on main".into());
        Ok(())
    }

    fn stash_apply(&self) -> GitResult<()> {
        self.record("stash apply".into())
    }

    fn stash_pop(&self) -> GitResult<()> {
        self.record("stash pop".into())?;
        let mut stashes = self.stashes.borrow_mut();
        if !stashes.is_empty() {
            stashes.remove(0);
        }
        Ok(())
    }

    fn stash_clear(&self) -> GitResult<()> {
        self.record("stash clear".into())?;
        self.stashes.borrow_mut().clear();
        Ok(())
    }

    fn stash_list(&self) -> GitResult<Vec<String>> {
        self.record("stash list".into())?;
        Ok(self.stashes.borrow().clone())
    }
}
