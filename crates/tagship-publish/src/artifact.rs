//! Build artifacts and pre-release filtering

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use tagship_core::config::DEFAULT_PRERELEASE_PATTERN;
use tagship_core::error::ConfigError;
use tagship_core::Result;

static DEFAULT_PRERELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_PRERELEASE_PATTERN).expect("Invalid regex"));

/// A single built distributable file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Full path of the file
    pub path: PathBuf,
    /// File name used for eligibility checks and reporting
    pub file_name: String,
}

impl Artifact {
    /// Create an artifact from its path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self { path, file_name }
    }
}

/// The files found in a build output directory
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// List the regular files directly under `output_dir`, in directory
    /// order. A missing directory gives an empty set.
    #[instrument(fields(output_dir = %output_dir.display()))]
    pub fn enumerate(output_dir: &Path) -> Result<Self> {
        if !output_dir.exists() {
            warn!(output_dir = %output_dir.display(), "build output directory does not exist");
            return Ok(Self::default());
        }

        let mut artifacts = Vec::new();
        for entry in std::fs::read_dir(output_dir)? {
            let path = entry?.path();
            if path.is_file() {
                artifacts.push(Artifact::new(path));
            }
        }

        debug!(count = artifacts.len(), "enumerated build artifacts");
        Ok(Self { artifacts })
    }

    /// Artifacts in enumeration order
    pub fn as_slice(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Number of artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Check if no artifacts were found
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl From<Vec<Artifact>> for ArtifactSet {
    fn from(artifacts: Vec<Artifact>) -> Self {
        Self { artifacts }
    }
}

/// Excludes development builds (`.devN` versions) from upload
#[derive(Debug, Clone)]
pub struct PrereleaseFilter {
    pattern: Regex,
}

impl PrereleaseFilter {
    /// Create a filter from a file-name regex
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
            field: "publish.prerelease_pattern".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Whether the artifact's file name carries a pre-release marker
    pub fn is_prerelease(&self, artifact: &Artifact) -> bool {
        self.pattern.is_match(&artifact.file_name)
    }

    /// Whether the artifact may be uploaded
    pub fn is_eligible(&self, artifact: &Artifact) -> bool {
        !self.is_prerelease(artifact)
    }
}

impl Default for PrereleaseFilter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PRERELEASE.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_enumerate_files_only() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pkg-1.0.0.tar.gz"), "").unwrap();
        std::fs::write(temp.path().join("pkg-1.0.0-py3-none-any.whl"), "").unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        std::fs::write(temp.path().join("nested").join("pkg-0.9.0.tar.gz"), "").unwrap();

        let set = ArtifactSet::enumerate(temp.path()).unwrap();
        let mut names: Vec<&str> = set.as_slice().iter().map(|a| a.file_name.as_str()).collect();
        names.sort();

        assert_eq!(names, vec!["pkg-1.0.0-py3-none-any.whl", "pkg-1.0.0.tar.gz"]);
    }

    #[test]
    fn test_enumerate_empty_and_missing() {
        let temp = TempDir::new().unwrap();
        assert!(ArtifactSet::enumerate(temp.path()).unwrap().is_empty());
        assert!(ArtifactSet::enumerate(&temp.path().join("dist")).unwrap().is_empty());
    }

    #[test]
    fn test_default_filter() {
        let filter = PrereleaseFilter::default();
        let eligible = |name: &str| filter.is_eligible(&Artifact::new(format!("dist/{}", name)));

        assert!(eligible("pkg-1.0.0-py3-none-any.whl"));
        assert!(eligible("pkg-1.0.0.tar.gz"));
        assert!(eligible("devtools-1.0.0-py3-none-any.whl"));
        assert!(!eligible("pkg-1.0.0.dev0-py3-none-any.whl"));
        assert!(!eligible("pkg-1.0.0.dev3.tar.gz"));
        assert!(!eligible("pkg-1.0.0.dev.tar.gz"));
        assert!(!eligible("pkg-2.1.dev12+g1a2b3c4.tar.gz"));
    }

    #[test]
    fn test_custom_filter() {
        let filter = PrereleaseFilter::new(r"(a|b|rc)\d+").unwrap();
        assert!(!filter.is_eligible(&Artifact::new("pkg-1.0.0rc1.tar.gz")));
        assert!(filter.is_eligible(&Artifact::new("pkg-1.0.0.dev0.tar.gz")));
    }

    #[test]
    fn test_invalid_filter() {
        assert!(PrereleaseFilter::new("(unclosed").is_err());
    }

    #[test]
    fn test_artifact_file_name() {
        let artifact = Artifact::new("/srv/dist/pkg-1.0.0.tar.gz");
        assert_eq!(artifact.file_name, "pkg-1.0.0.tar.gz");
    }
}
