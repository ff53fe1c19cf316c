//! Git types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about a git commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Commit message (first line)
    pub message: String,
    /// Message body after the summary line
    pub body: Option<String>,
    /// Author name
    pub author: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            body: None,
            author: author.into(),
            timestamp,
        }
    }

    /// Set the commit body; blank bodies are dropped
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = (!body.trim().is_empty()).then_some(body);
        self
    }

    /// First seven characters of the hash
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}

/// Information about a git tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// Commit hash the tag points to
    pub commit_hash: String,
    /// Tag message (for annotated tags)
    pub message: Option<String>,
    /// Version extracted from the tag name
    pub version: Option<String>,
}

impl TagInfo {
    /// Create a new TagInfo
    pub fn new(name: impl Into<String>, commit_hash: impl Into<String>) -> Self {
        let name = name.into();
        let version = extract_version(&name);

        Self {
            name,
            commit_hash: commit_hash.into(),
            message: None,
            version,
        }
    }

    /// Set the tag message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into().trim_end().to_string());
        self
    }
}

/// Extract the version part of a tag name (`v1.0.0`, `1.0`, `numeral-v2.1.0`)
fn extract_version(tag: &str) -> Option<String> {
    let candidate = match tag.rfind("-v") {
        Some(pos) => &tag[pos + 2..],
        None => tag.strip_prefix('v').unwrap_or(tag),
    };

    looks_like_version(candidate).then(|| candidate.to_string())
}

/// A dotted version whose first component is numeric
fn looks_like_version(s: &str) -> bool {
    let mut parts = s.split('.');
    let first_is_numeric = parts
        .next()
        .is_some_and(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    first_is_numeric && parts.next().is_some()
}
