//! Repository adapter implementing [`GitOps`].
//!
//! Read-only queries (current branch, ref existence, log, stash list) go
//! through libgit2. Everything that mutates the repository is delegated to
//! the `git` executable with inherited stdio, so the tool's own output and
//! prompts reach the user unchanged.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use git2::{ErrorCode, Sort};

use crate::error::{Error, Result};
use crate::traits::GitOps;
use crate::types::{CommitSummary, MergeStrategy, ResetMode};

type Echo = Box<dyn Fn(&str)>;

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
    workdir: PathBuf,
    echo: Option<Echo>,
}

impl Repository {
    /// Open the repository containing `path`.
    ///
    /// # Errors
    /// Returns error if no repository found at path or any parent, or if the
    /// repository is bare.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => Error::NotARepository,
            _ => Error::Git2(e),
        })?;
        let workdir = inner.workdir().ok_or(Error::BareRepository)?.to_path_buf();

        Ok(Self {
            inner,
            workdir,
            echo: None,
        })
    }

    /// Open the repository containing the current directory.
    ///
    /// # Errors
    /// Returns error if not inside a git repository.
    pub fn open_current() -> Result<Self> {
        Self::open(".")
    }

    /// Report every `git` command line to `echo` before it runs.
    #[must_use]
    pub fn with_echo(mut self, echo: impl Fn(&str) + 'static) -> Self {
        self.echo = Some(Box::new(echo));
        self
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Run `git <args>` in the working directory.
    fn run_git(&self, args: &[&str]) -> Result<()> {
        let command = format!("git {}", args.join(" "));
        if let Some(echo) = &self.echo {
            echo(&command);
        }

        let status = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .status()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command,
                code: status.code(),
            })
        }
    }

    fn reference_exists(&self, name: &str) -> bool {
        self.inner.find_reference(name).is_ok()
    }
}

impl GitOps for Repository {
    fn current_branch(&self) -> Result<String> {
        let head = self.inner.head()?;
        if !head.is_branch() {
            return Err(Error::DetachedHead);
        }

        head.shorthand()
            .map(String::from)
            .ok_or(Error::DetachedHead)
    }

    fn local_branch_exists(&self, name: &str) -> bool {
        self.reference_exists(&format!("refs/heads/{name}"))
    }

    fn remote_branch_exists(&self, remote: &str, name: &str) -> bool {
        self.reference_exists(&format!("refs/remotes/{remote}/{name}"))
    }

    fn recent_commits(&self, limit: usize) -> Result<Vec<CommitSummary>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut commits = Vec::with_capacity(limit);
        for oid in revwalk.take(limit) {
            let commit = self.inner.find_commit(oid?)?;
            let short_id = commit.as_object().short_id()?;

            commits.push(CommitSummary {
                id: commit.id().to_string(),
                short_id: short_id.as_str().unwrap_or_default().to_string(),
                summary: commit.summary().unwrap_or_default().to_string(),
                time: DateTime::<Utc>::from_timestamp(commit.time().seconds(), 0)
                    .unwrap_or_default(),
            });
        }

        Ok(commits)
    }

    fn stage_all(&self) -> Result<()> {
        self.run_git(&["add", "--all"])
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run_git(&["commit", "-m", message])
    }

    fn reset(&self, reference: &str, mode: ResetMode) -> Result<()> {
        self.run_git(&["reset", mode.as_flag(), reference])
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        // `--` keeps a missing branch from being read as a pathspec
        self.run_git(&["checkout", branch, "--"])
    }

    fn checkout_tracking(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_git(&["checkout", "--track", &format!("{remote}/{branch}")])
    }

    fn checkout_new(&self, branch: &str) -> Result<()> {
        self.run_git(&["checkout", "-b", branch])
    }

    fn merge(&self, reference: &str, strategy: Option<MergeStrategy>) -> Result<()> {
        match strategy {
            Some(s) => self.run_git(&["merge", "--no-edit", "-X", s.as_option(), reference]),
            None => self.run_git(&["merge", "--no-edit", reference]),
        }
    }

    fn merge_abort(&self) -> Result<()> {
        self.run_git(&["merge", "--abort"])
    }

    fn fetch_all(&self) -> Result<()> {
        self.run_git(&["fetch", "--all"])
    }

    fn fetch(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_git(&["fetch", remote, branch])
    }

    fn pull_current(&self) -> Result<()> {
        self.run_git(&["pull"])
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_git(&["pull", remote, branch])
    }

    fn push_current(&self) -> Result<()> {
        self.run_git(&["push"])
    }

    fn push(&self, remote: &str, branch: &str, set_upstream: bool) -> Result<()> {
        if set_upstream {
            self.run_git(&["push", "--set-upstream", remote, branch])
        } else {
            self.run_git(&["push", remote, branch])
        }
    }

    fn stash_push(&self) -> Result<()> {
        self.run_git(&["stash"])
    }

    fn stash_apply(&self) -> Result<()> {
        self.run_git(&["stash", "apply"])
    }

    fn stash_pop(&self) -> Result<()> {
        self.run_git(&["stash", "pop"])
    }

    fn stash_clear(&self) -> Result<()> {
        self.run_git(&["stash", "clear"])
    }

    fn stash_list(&self) -> Result<Vec<String>> {
        if !self.reference_exists("refs/stash") {
            return Ok(Vec::new());
        }

        let reflog = self.inner.reflog("refs/stash")?;
        let entries = reflog
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("stash@{{{i}}}: {}", entry.message().unwrap_or_default()))
            .collect();

        Ok(entries)
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn commit_file(repo: &git2::Repository, name: &str, content: &str, message: &str) {
        let workdir = repo.workdir().unwrap().to_path_buf();
        fs::write(workdir.join(name), content).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();

        let sig = repo.signature().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let parents: Vec<git2::Commit<'_>> = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap();
    }

    fn init_test_repo() -> (TempDir, Repository) {
        let temp = TempDir::new().unwrap();
        let repo = git2::Repository::init(temp.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        commit_file(&repo, "README.md", "# Test\n", "Initial commit");
        drop(repo);

        let wrapped = Repository::open(temp.path()).unwrap();
        (temp, wrapped)
    }

    #[test]
    fn test_open_outside_repository() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("not-a-repo");
        fs::create_dir(&nested).unwrap();

        // discover walks up to the filesystem root; only assert when nothing above is a repo
        if git2::Repository::discover(&nested).is_err() {
            assert!(matches!(
                Repository::open(&nested),
                Err(Error::NotARepository)
            ));
        }
    }

    #[test]
    fn test_current_branch() {
        let (_temp, repo) = init_test_repo();
        let branch = repo.current_branch().unwrap();
        assert!(branch == "main" || branch == "master");
    }

    #[test]
    fn test_local_branch_exists_is_exact() {
        let (_temp, repo) = init_test_repo();
        let head = repo.inner.head().unwrap().peel_to_commit().unwrap();
        repo.inner.branch("feature/login", &head, false).unwrap();

        assert!(repo.local_branch_exists("feature/login"));
        assert!(!repo.local_branch_exists("feature"));
        assert!(!repo.local_branch_exists("login"));
    }

    #[test]
    fn test_remote_branch_exists() {
        let (_temp, repo) = init_test_repo();
        let head = repo.inner.head().unwrap().target().unwrap();
        repo.inner
            .reference("refs/remotes/origin/develop", head, false, "test")
            .unwrap();

        assert!(repo.remote_branch_exists("origin", "develop"));
        assert!(!repo.remote_branch_exists("upstream", "develop"));
        assert!(!repo.local_branch_exists("develop"));
    }

    #[test]
    fn test_recent_commits_newest_first_and_bounded() {
        let (temp, repo) = init_test_repo();
        let raw = git2::Repository::open(temp.path()).unwrap();
        for i in 1..=3 {
            commit_file(&raw, "file.txt", &format!("v{i}"), &format!("Commit {i}"));
        }

        let all = repo.recent_commits(20).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].summary, "Commit 3");
        assert_eq!(all[3].summary, "Initial commit");
        assert!(all[0].id.starts_with(&all[0].short_id));

        let two = repo.recent_commits(2).unwrap();
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn test_stash_list_empty() {
        let (_temp, repo) = init_test_repo();
        assert!(repo.stash_list().unwrap().is_empty());
    }

    #[test]
    fn test_failed_command_reports_exit_code() {
        let (_temp, repo) = init_test_repo();

        let err = repo.checkout("does-not-exist").unwrap_err();
        match err {
            Error::CommandFailed { command, code } => {
                assert_eq!(command, "git checkout does-not-exist --");
                assert!(code.is_some_and(|c| c != 0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_checkout_never_restores_a_path_of_the_same_name() {
        let (temp, repo) = init_test_repo();
        let raw = git2::Repository::open(temp.path()).unwrap();
        commit_file(&raw, "docs", "committed\n", "Add docs");
        fs::write(temp.path().join("docs"), "uncommitted edits\n").unwrap();

        assert!(matches!(
            repo.checkout("docs"),
            Err(Error::CommandFailed { .. })
        ));
        assert_eq!(
            fs::read_to_string(temp.path().join("docs")).unwrap(),
            "uncommitted edits\n"
        );
    }

    #[test]
    fn test_echo_sees_command_line() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let (temp, _repo) = init_test_repo();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let repo = Repository::open(temp.path())
            .unwrap()
            .with_echo(move |cmd| sink.borrow_mut().push(cmd.to_string()));

        fs::write(temp.path().join("new.txt"), "x").unwrap();
        repo.stage_all().unwrap();
        repo.commit("Add new file").unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["git add --all", "git commit -m Add new file"]
        );
        assert_eq!(repo.recent_commits(1).unwrap()[0].summary, "Add new file");
    }
}
