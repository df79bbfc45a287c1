//! Read-only access to a git repository
//!
//! Every query shells out to the `git` binary with `-C <root>`, so the
//! repository is never modified and no libgit bindings are needed.

use crate::detector::DiffSource;
use crate::error::{DetectorError, Result};
use crate::git::diff::{parse_name_status, DiffEntry};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, warn};

/// Where the mainline reference was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefSource {
    /// A local branch under refs/heads
    Local,
    /// A remote-tracking branch under refs/remotes
    Remote,
}

/// A resolved mainline reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainlineRef {
    /// Full ref name that resolved, e.g. `refs/heads/main`
    pub reference: String,
    /// Commit id the ref points to
    pub commit: String,
    pub source: RefSource,
}

/// Handle on a repository working copy
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`, resolved to its top level
    pub fn open(path: &Path) -> Result<Self> {
        let output = run_git(path, &["rev-parse", "--show-toplevel"])?;
        if !output.status.success() {
            debug!(
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "rev-parse --show-toplevel failed"
            );
            return Err(DetectorError::NotGitRepo {
                path: path.display().to_string(),
            });
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if root.is_empty() {
            return Err(DetectorError::NotGitRepo {
                path: path.display().to_string(),
            });
        }
        debug!(root = %root, "opened repository");
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    /// Repository top-level directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the fully-qualified `reference` exists
    ///
    /// Only `show-ref` exiting 1 means absent. A ref that exists but is
    /// broken (e.g. points at a missing object) is an error.
    pub fn ref_exists(&self, reference: &str) -> Result<bool> {
        let output = run_git(&self.root, &["show-ref", "--verify", "--quiet", reference])?;
        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(command_failed("show-ref --verify", &output)),
        }
    }

    /// Resolve `reference` to a commit id, or None if it does not exist
    ///
    /// An existing ref that cannot be peeled to a commit is returned as an
    /// error so it cannot be mistaken for "not found".
    pub fn find_commit(&self, reference: &str) -> Result<Option<String>> {
        if !self.ref_exists(reference)? {
            return Ok(None);
        }

        let spec = format!("{}^{{commit}}", reference);
        let output = run_git(&self.root, &["rev-parse", "--verify", &spec])?;
        if !output.status.success() {
            return Err(command_failed(&format!("rev-parse {}", reference), &output));
        }
        let commit = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Some(commit))
    }

    /// Resolve the mainline branch, preferring the local branch over the
    /// remote-tracking one
    pub fn resolve_mainline(&self, branch: &str, remote: &str) -> Result<MainlineRef> {
        let local = format!("refs/heads/{}", branch);
        if let Some(commit) = self.find_commit(&local)? {
            return Ok(MainlineRef {
                reference: local,
                commit,
                source: RefSource::Local,
            });
        }

        let tracking = format!("refs/remotes/{}/{}", remote, branch);
        warn!(
            missing = %local,
            fallback = %tracking,
            "local mainline branch not found, using remote-tracking ref"
        );
        match self.find_commit(&tracking)? {
            Some(commit) => Ok(MainlineRef {
                reference: tracking,
                commit,
                source: RefSource::Remote,
            }),
            None => Err(DetectorError::RefNotFound {
                branch: branch.to_string(),
                remote: remote.to_string(),
            }),
        }
    }

    /// Commit currently checked out
    pub fn head_commit(&self) -> Result<String> {
        let output = run_git(&self.root, &["rev-parse", "--verify", "HEAD^{commit}"])?;
        if !output.status.success() {
            return Err(command_failed("rev-parse HEAD", &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// All best common ancestors of two commits, in git's order
    pub fn merge_bases(&self, a: &str, b: &str) -> Result<Vec<String>> {
        let output = run_git(&self.root, &["merge-base", "--all", a, b])?;

        if !output.status.success() {
            // Exit 1 with no output means the histories are unrelated
            if output.status.code() == Some(1) && output.stderr.is_empty() {
                debug!(a, b, "no common ancestor");
                return Ok(Vec::new());
            }
            return Err(command_failed("merge-base", &output));
        }

        let bases = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.to_string())
            .collect();
        Ok(bases)
    }

    /// File-level changes going from `from` to `to`, with rename detection
    pub fn diff_trees(&self, from: &str, to: &str) -> Result<Vec<DiffEntry>> {
        let output = run_git(
            &self.root,
            &["diff-tree", "-r", "-z", "-M", "--name-status", from, to],
        )?;
        if !output.status.success() {
            return Err(command_failed("diff-tree", &output));
        }

        let entries = parse_name_status(&String::from_utf8_lossy(&output.stdout))?;
        debug!(from, to, entries = entries.len(), "computed tree diff");
        Ok(entries)
    }
}

impl DiffSource for GitRepo {
    fn diff(&self, from: &str, to: &str) -> Result<Vec<DiffEntry>> {
        self.diff_trees(from, to)
    }
}

fn run_git(dir: &Path, args: &[&str]) -> Result<Output> {
    debug!(dir = %dir.display(), ?args, "running git");
    Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .map_err(|e| DetectorError::GitError(format!("Failed to run git: {}", e)))
}

fn command_failed(what: &str, output: &Output) -> DetectorError {
    DetectorError::GitError(format!(
        "git {} failed: {}",
        what,
        String::from_utf8_lossy(&output.stderr).trim()
    ))
}
