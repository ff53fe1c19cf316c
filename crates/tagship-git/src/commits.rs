//! Commit history and release commits

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use git2::{Oid, Sort};
use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Get commits reachable from HEAD but not from `since`
    pub fn commits_since_oid(&self, since: Oid) -> Result<Vec<CommitInfo>> {
        self.walk_head(Some(since))
    }

    /// Get commits since a tag
    pub fn commits_since_tag(&self, tag_name: &str) -> Result<Vec<CommitInfo>> {
        let tag_ref = format!("refs/tags/{}", tag_name);
        let reference = self.repo.find_reference(&tag_ref)?;
        let target = reference.peel_to_commit()?;

        self.commits_since_oid(target.id())
    }

    /// Get all commits on the current branch
    pub fn all_commits(&self) -> Result<Vec<CommitInfo>> {
        self.walk_head(None)
    }

    fn walk_head(&self, hide: Option<Oid>) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        if let Some(oid) = hide {
            revwalk.hide(oid)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "walked commit history");
        Ok(commits)
    }

    /// Stage `paths` and commit them on HEAD.
    ///
    /// Paths may be absolute or relative to the work tree. Returns the new
    /// commit hash, or `None` when the staged tree equals HEAD's tree.
    #[instrument(skip(self, paths), fields(count = paths.len()))]
    pub fn commit_paths(&self, paths: &[PathBuf], message: &str) -> Result<Option<String>> {
        let mut index = self.repo.index()?;
        for path in paths {
            let relative = self.workdir_relative(path)?;
            index.add_path(&relative)?;
        }
        index.write()?;

        let tree_id = index.write_tree()?;
        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
            Err(e) => return Err(e.into()),
        };

        if parent.as_ref().is_some_and(|p| p.tree_id() == tree_id) {
            debug!("nothing to commit");
            return Ok(None);
        }

        let tree = self.repo.find_tree(tree_id)?;
        let sig = self.repo.signature()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        let oid = self
            .repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;

        info!(commit = %oid, message, "created commit");
        Ok(Some(oid.to_string()))
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let author = commit.author();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    CommitInfo::new(
        commit.id().to_string(),
        commit.summary().unwrap_or("(no message)"),
        author.name().unwrap_or("Unknown"),
        timestamp,
    )
    .with_body(commit.body().unwrap_or_default())
}
