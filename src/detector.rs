//! New model detection pipeline
//!
//! Resolves the mainline and head commits, finds where the current branch
//! left the mainline, lists the source files added since then and picks the
//! model directory out of them.

use crate::config::{Config, MergeBaseScan};
use crate::error::Result;
use crate::git::{DiffEntry, GitRepo, MainlineRef};
use crate::model::ModelPattern;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Anything that can list the file changes between two commits
pub trait DiffSource {
    /// Changes going from `from` to `to`
    fn diff(&self, from: &str, to: &str) -> Result<Vec<DiffEntry>>;
}

/// Everything learned during one detection run
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub mainline: MainlineRef,
    pub head: String,
    pub branching_commits: Vec<String>,
    pub new_files: Vec<String>,
    pub model: Option<String>,
}

/// Source files added between each branching commit and `head`
///
/// Paths are accumulated in diff order across branching commits and are not
/// deduplicated.
pub fn collect_new_files<D: DiffSource + ?Sized>(
    source: &D,
    head: &str,
    branching_commits: &[String],
    config: &Config,
) -> Result<Vec<String>> {
    let commits = match config.merge_base_scan {
        MergeBaseScan::All => branching_commits,
        MergeBaseScan::FirstOnly => &branching_commits[..branching_commits.len().min(1)],
    };

    let mut new_files = Vec::new();
    for commit in commits {
        for entry in source.diff(commit, head)? {
            if !entry.is_added() {
                if let (Some(from), Some(to)) = (&entry.a_path, &entry.b_path) {
                    if from != to {
                        debug!(from = %from, to = %to, "skipping moved file");
                    }
                }
                continue;
            }
            if let Some(path) = entry.b_path {
                if config.has_source_extension(&path) {
                    new_files.push(path);
                }
            }
        }
    }
    Ok(new_files)
}

/// Run the full detection against the configured repository
pub fn detect(config: &Config) -> Result<DetectionReport> {
    let pattern = ModelPattern::new(&config.src_root)?;

    let start = config.repo_path.clone().unwrap_or_else(|| PathBuf::from("."));
    let repo = GitRepo::open(&start)?;
    debug!(root = %repo.root().display(), "inspecting repository");

    let mainline = repo.resolve_mainline(&config.main_branch, &config.remote)?;
    let head = repo.head_commit()?;
    debug!(mainline = %mainline.commit, head = %head, "resolved commits");

    let branching_commits = repo.merge_bases(&mainline.commit, &head)?;
    debug!(count = branching_commits.len(), "found branching commits");

    let new_files = collect_new_files(&repo, &head, &branching_commits, config)?;
    debug!(count = new_files.len(), "collected new source files");

    let model = pattern.first_match(&new_files);

    Ok(DetectionReport {
        mainline,
        head,
        branching_commits,
        new_files,
        model,
    })
}
