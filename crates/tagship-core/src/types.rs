//! Core types for Tagship

use serde::{Deserialize, Serialize};

/// A stage of the release workflow, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStep {
    /// Version written into source files
    StampVersion,
    /// Changelog entry generated and written
    Changelog,
    /// Release commit created
    Commit,
    /// Version tag created
    Tag,
    /// Commit and tag pushed to the remote
    Push,
    /// Distribution artifacts built
    Build,
    /// Artifacts dispatched to the credential profile
    Publish,
}

impl ReleaseStep {
    /// Returns the string representation of the step
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StampVersion => "stamp-version",
            Self::Changelog => "changelog",
            Self::Commit => "commit",
            Self::Tag => "tag",
            Self::Push => "push",
            Self::Build => "build",
            Self::Publish => "publish",
        }
    }
}

impl std::fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a release run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseResult {
    /// The package name
    pub package: String,
    /// Version tag found before this release
    pub previous_version: Option<String>,
    /// Released version
    pub new_version: String,
    /// Tag for the released version
    pub tag: String,
    /// Credential profile used for publishing
    pub profile: Option<String>,
    /// Steps that ran to completion
    pub completed: Vec<ReleaseStep>,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Any notes or warnings
    pub notes: Vec<String>,
}

impl ReleaseResult {
    /// Create a new release result
    pub fn new(
        package: impl Into<String>,
        new_version: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            previous_version: None,
            new_version: new_version.into(),
            tag: tag.into(),
            profile: None,
            completed: Vec::new(),
            dry_run: false,
            notes: Vec::new(),
        }
    }

    /// Set the previous version
    pub fn with_previous_version(mut self, version: Option<String>) -> Self {
        self.previous_version = version;
        self
    }

    /// Mark as a dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Record a completed step
    pub fn complete(&mut self, step: ReleaseStep) {
        if !self.completed.contains(&step) {
            self.completed.push(step);
        }
    }

    /// Whether a step completed
    pub fn has_completed(&self, step: ReleaseStep) -> bool {
        self.completed.contains(&step)
    }

    /// Add a note
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}
