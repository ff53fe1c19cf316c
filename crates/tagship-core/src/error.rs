//! Error types for Tagship

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TagshipError
pub type Result<T> = std::result::Result<T, TagshipError>;

/// Main error type for Tagship operations
#[derive(Debug, Error)]
pub enum TagshipError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Build/tooling errors
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// Publish errors
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// Workflow-related errors
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Tag pattern is not a valid regex
    #[error("Invalid tag pattern: {0}")]
    InvalidTagPattern(String),

    /// Tag already exists
    #[error("Tag already exists: {0}")]
    TagExists(String),

    /// Working directory is not clean
    #[error("Working directory has uncommitted changes")]
    DirtyWorkingDirectory,

    /// HEAD is not on the release branch
    #[error("Not on release branch '{expected}' (current: {current})")]
    WrongBranch { expected: String, current: String },

    /// Path is outside the repository work tree
    #[error("Path {0} is outside the repository work tree")]
    PathOutsideRepository(PathBuf),

    /// Failed to push
    #[error("Failed to push to remote: {0}")]
    PushFailed(String),

    /// Remote not found
    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Invalid version format
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    /// No version marker in a file that should carry one
    #[error("No version marker found in {0}")]
    MarkerNotFound(PathBuf),

    /// Failed to parse a manifest while stamping the version
    #[error("Failed to parse {path}: {reason}")]
    ManifestParseError { path: PathBuf, reason: String },
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write changelog
    #[error("Failed to write changelog {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from external build tooling
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Command execution failed
    #[error("Command failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },

    /// Required tool is not installed
    #[error("Required tool not found on PATH: {0}")]
    ToolNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a single publish call
#[derive(Debug, Error)]
pub enum PublishError {
    /// The upload tool could not be located
    #[error("Upload tool not found on PATH: {0}")]
    ToolNotFound(String),

    /// The upload tool could not be started
    #[error("Failed to run {command}: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// The upload tool exited unsuccessfully
    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Workflow-related errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// User cancelled
    #[error("Operation cancelled by user")]
    Cancelled,
}
