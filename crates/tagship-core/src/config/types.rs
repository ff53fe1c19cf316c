//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Main configuration for Tagship
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Git configuration
    pub git: GitConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Version stamping configuration
    pub version: VersionConfig,

    /// Package build configuration
    pub build: BuildConfig,

    /// Publishing configuration
    pub publish: PublishConfig,
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote name
    pub remote: String,

    /// Branch to push
    pub branch: String,

    /// Whether to require clean working directory
    pub require_clean: bool,

    /// Whether to push the release commit and tag
    pub push: bool,

    /// Tag format (e.g., "v{version}")
    pub tag_format: String,

    /// Default tag message offered at the prompt
    pub tag_message: String,

    /// Commit message template for the release commit
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            require_clean: true,
            push: true,
            tag_format: "v{version}".to_string(),
            tag_message: "Release {version}".to_string(),
            commit_message: "chore(release): {version}".to_string(),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Whether to generate changelog
    pub enabled: bool,

    /// Changelog file path
    pub file: PathBuf,

    /// Commit types to include
    #[serde(default)]
    pub types: HashMap<String, CommitTypeConfig>,

    /// Whether to include commit hashes
    pub include_hashes: bool,

    /// Whether to include authors
    pub include_authors: bool,

    /// List commits that don't follow conventional format under "Other Changes"
    pub include_untyped: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        let mut types = HashMap::new();
        for (commit_type, section, hidden) in [
            ("feat", "Features", false),
            ("fix", "Bug Fixes", false),
            ("docs", "Documentation", false),
            ("perf", "Performance", false),
            ("refactor", "Refactoring", true),
            ("test", "Tests", true),
            ("chore", "Chores", true),
        ] {
            types.insert(
                commit_type.to_string(),
                CommitTypeConfig {
                    section: section.to_string(),
                    hidden,
                },
            );
        }

        Self {
            enabled: true,
            file: PathBuf::from("CHANGELOG.md"),
            types,
            include_hashes: true,
            include_authors: false,
            include_untyped: true,
        }
    }
}

/// Configuration for a commit type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitTypeConfig {
    /// Section header in changelog
    pub section: String,
    /// Whether to hide this type from changelog
    #[serde(default)]
    pub hidden: bool,
}

/// Files that carry the package version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Files to stamp with the release version (`pyproject.toml` or any
    /// file with a `__version__ = '...'` line)
    pub files: Vec<PathBuf>,
}

/// Package build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Whether to build as part of a release
    pub enabled: bool,

    /// Build command and arguments
    pub command: Vec<String>,

    /// Directory the build writes artifacts into
    pub output_dir: PathBuf,

    /// Remove the output directory before building
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: ["python", "setup.py", "sdist", "bdist_wheel"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            output_dir: PathBuf::from("dist"),
            clean: true,
        }
    }
}

/// Publishing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Whether to publish
    pub enabled: bool,

    /// Directory holding `<profile>.<ext>` credential files
    pub profile_dir: PathBuf,

    /// Credential file extension, without the leading dot
    pub profile_extension: String,

    /// Regex matched against artifact file names to exclude snapshot builds
    pub prerelease_pattern: String,

    /// Repository section to select inside the credential file
    pub repository: Option<String>,

    /// Check artifacts instead of uploading them
    pub dry_run: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            profile_dir: PathBuf::from("."),
            profile_extension: DEFAULT_PROFILE_EXTENSION.to_string(),
            prerelease_pattern: DEFAULT_PRERELEASE_PATTERN.to_string(),
            repository: None,
            dry_run: false,
        }
    }
}

/// Default credential file extension
pub const DEFAULT_PROFILE_EXTENSION: &str = "pypirc";

/// Default pre-release pattern: a PEP 440 `.devN` segment
pub const DEFAULT_PRERELEASE_PATTERN: &str = r"\.dev\d*(?:[.+-]|$)";
