//! Remote operations

use std::path::Path;
use std::process::Command;

use tracing::{info, instrument};

use crate::repository::{GitRepo, Result};
use tagship_core::error::GitError;

impl GitRepo {
    /// Get list of remote names
    pub fn remotes(&self) -> Result<Vec<String>> {
        let remotes = self.repo.remotes()?;
        Ok(remotes
            .iter()
            .filter_map(|r| r.map(|s| s.to_string()))
            .collect())
    }

    /// Check if a remote exists
    pub fn has_remote(&self, name: &str) -> Result<bool> {
        Ok(self.remotes()?.iter().any(|r| r == name))
    }

    /// Push the branch and its annotated tags with the git CLI
    pub fn push_with_tags(&self, remote: &str, branch: &str) -> Result<()> {
        if !self.has_remote(remote)? {
            return Err(GitError::RemoteNotFound(remote.to_string()));
        }
        git_push_with_tags(self.path(), remote, branch)
    }
}

/// Push commits and annotated tags using the git CLI, which picks up the
/// operator's credential helpers and SSH agent
#[instrument(fields(dir = %dir.display(), remote, branch))]
pub fn git_push_with_tags(dir: &Path, remote: &str, branch: &str) -> Result<()> {
    let start = std::time::Instant::now();
    let output = Command::new("git")
        .args(["push", "--follow-tags", remote, branch])
        .current_dir(dir)
        .output()
        .map_err(|e| GitError::PushFailed(format!("could not run git: {}", e)))?;

    info!(
        remote,
        branch,
        duration_ms = start.elapsed().as_millis(),
        success = output.status.success(),
        "git push with tags (CLI)"
    );

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::PushFailed(format!(
            "{}/{}: {}",
            remote,
            branch,
            stderr.trim()
        )));
    }

    Ok(())
}
