//! Changelog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tagship_git::CommitInfo;

/// Section title for commits without a conventional type
pub const UNTYPED_SECTION: &str = "Other Changes";

/// A commit as it appears in the changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Original commit hash
    pub hash: String,
    /// Conventional type (feat, fix, ...); `None` for free-form messages
    pub commit_type: Option<String>,
    /// Scope (optional, in parentheses)
    pub scope: Option<String>,
    /// Whether this is a breaking change
    pub breaking: bool,
    /// Commit description
    pub description: String,
    /// Commit body without footers
    pub body: Option<String>,
    /// Footer fields
    pub footers: Vec<Footer>,
    /// Author name
    pub author: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

impl ParsedCommit {
    /// Wrap a commit whose summary is not in conventional form
    pub fn untyped(commit: &CommitInfo) -> Self {
        Self {
            hash: commit.hash.clone(),
            commit_type: None,
            scope: None,
            breaking: false,
            description: commit.message.clone(),
            body: commit.body.clone(),
            footers: Vec::new(),
            author: commit.author.clone(),
            timestamp: commit.timestamp,
        }
    }

    /// First seven characters of the hash
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}

/// A footer field from a conventional commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    /// Footer token (e.g., "BREAKING CHANGE", "Fixes", "Refs")
    pub token: String,
    /// Footer value
    pub value: String,
}

/// A section in a changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Commits in this section
    pub commits: Vec<ParsedCommit>,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            commits: Vec::new(),
        }
    }

    /// Add a commit to the section
    pub fn add_commit(&mut self, commit: ParsedCommit) {
        self.commits.push(commit);
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// A changelog entry for one released version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Version string
    pub version: String,
    /// Release date
    pub date: DateTime<Utc>,
    /// Sections in display order
    pub sections: Vec<Section>,
    /// Breaking changes (highlighted separately)
    pub breaking_changes: Vec<ParsedCommit>,
}

impl ChangelogEntry {
    /// Create a new changelog entry dated now
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: Utc::now(),
            sections: Vec::new(),
            breaking_changes: Vec::new(),
        }
    }

    /// Set the date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Add a commit to the section titled `title`, creating it on first use
    pub fn push_to_section(&mut self, title: &str, commit: ParsedCommit) {
        match self.sections.iter_mut().find(|s| s.title == title) {
            Some(section) => section.add_commit(commit),
            None => {
                let mut section = Section::new(title);
                section.add_commit(commit);
                self.sections.push(section);
            }
        }
    }

    /// Add a breaking change
    pub fn add_breaking_change(&mut self, commit: ParsedCommit) {
        self.breaking_changes.push(commit);
    }

    /// Number of commits listed across all sections
    pub fn commit_count(&self) -> usize {
        self.sections.iter().map(|s| s.commits.len()).sum()
    }

    /// Check if entry has any content
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty) && self.breaking_changes.is_empty()
    }
}
