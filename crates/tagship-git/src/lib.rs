//! Tagship Git - Git operations for release automation
//!
//! This crate provides the repository operations a release needs: commit
//! history for the changelog, version tags, committing release files and
//! pushing.

mod commits;
mod remote;
mod repository;
mod status;
mod tags;
pub mod types;

pub use remote::git_push_with_tags;
pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
