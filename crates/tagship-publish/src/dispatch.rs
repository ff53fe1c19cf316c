//! Per-artifact publish dispatch
//!
//! Each artifact gets exactly one outcome. Missing inputs and ineligible
//! builds are skips, upload errors are failures, and neither stops the
//! remaining artifacts from being dispatched.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::artifact::{Artifact, PrereleaseFilter};
use crate::profile::CredentialProfile;
use crate::publisher::Publisher;

/// The input that was missing when an artifact was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum MissingInput {
    /// No credential profile was resolved for the run
    Profile,
    /// The resolved profile's credential file does not exist
    ProfileConfig(PathBuf),
    /// The artifact file disappeared before dispatch
    Artifact(PathBuf),
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile => write!(f, "no credential profile"),
            Self::ProfileConfig(path) => write!(f, "credential file {} not found", path.display()),
            Self::Artifact(path) => write!(f, "artifact {} not found", path.display()),
        }
    }
}

/// What happened to one artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// Uploaded successfully
    Published,
    /// Carries a pre-release marker
    SkippedNotEligible,
    /// A required input was missing
    SkippedMissingArtifact(MissingInput),
    /// The publisher reported an error
    Failed(String),
}

impl DispatchOutcome {
    /// Whether the artifact was skipped rather than attempted
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedNotEligible | Self::SkippedMissingArtifact(_))
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Published => write!(f, "published"),
            Self::SkippedNotEligible => write!(f, "skipped (pre-release build)"),
            Self::SkippedMissingArtifact(missing) => write!(f, "skipped ({})", missing),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Outcome record for one input artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchResult {
    /// The artifact as it was passed in
    pub artifact: Artifact,
    /// What happened to it
    #[serde(flatten)]
    pub outcome: DispatchOutcome,
}

/// Sends each eligible artifact to the publisher with the run's profile
pub struct PublishDispatcher<P> {
    publisher: P,
    filter: PrereleaseFilter,
}

impl<P: Publisher> PublishDispatcher<P> {
    /// Create a dispatcher
    pub fn new(publisher: P, filter: PrereleaseFilter) -> Self {
        Self { publisher, filter }
    }

    /// Dispatch every artifact in order, returning one result per input.
    ///
    /// A path that appears more than once is published at most once; later
    /// occurrences repeat the first occurrence's outcome.
    #[instrument(skip_all, fields(artifacts = artifacts.len(), profile = profile.map(|p| p.name.as_str())))]
    pub fn dispatch_all(
        &self,
        artifacts: &[Artifact],
        profile: Option<&CredentialProfile>,
    ) -> Vec<DispatchResult> {
        if profile.is_none() && !artifacts.is_empty() {
            warn!("no credential profile resolved, nothing will be uploaded");
        }

        let mut seen: HashMap<&Path, DispatchOutcome> = HashMap::new();
        let mut results = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            let outcome = match seen.get(artifact.path.as_path()) {
                Some(previous) => {
                    debug!(artifact = %artifact.file_name, "duplicate artifact, not dispatched again");
                    previous.clone()
                }
                None => {
                    let outcome = self.dispatch_one(artifact, profile);
                    seen.insert(&artifact.path, outcome.clone());
                    outcome
                }
            };

            results.push(DispatchResult {
                artifact: artifact.clone(),
                outcome,
            });
        }

        results
    }

    fn dispatch_one(
        &self,
        artifact: &Artifact,
        profile: Option<&CredentialProfile>,
    ) -> DispatchOutcome {
        let Some(profile) = profile else {
            return DispatchOutcome::SkippedMissingArtifact(MissingInput::Profile);
        };

        if !profile.config_exists() {
            warn!(
                profile = %profile.name,
                config = %profile.config_path.display(),
                "credential file missing, skipping artifact"
            );
            return DispatchOutcome::SkippedMissingArtifact(MissingInput::ProfileConfig(
                profile.config_path.clone(),
            ));
        }

        if !artifact.path.exists() {
            warn!(artifact = %artifact.path.display(), "artifact missing, skipping");
            return DispatchOutcome::SkippedMissingArtifact(MissingInput::Artifact(
                artifact.path.clone(),
            ));
        }

        if !self.filter.is_eligible(artifact) {
            info!(artifact = %artifact.file_name, "pre-release build, not uploading");
            return DispatchOutcome::SkippedNotEligible;
        }

        match self.publisher.publish(&artifact.path, &profile.config_path) {
            Ok(()) => {
                info!(artifact = %artifact.file_name, profile = %profile.name, "artifact published");
                DispatchOutcome::Published
            }
            Err(e) => {
                warn!(artifact = %artifact.file_name, error = %e, "publish failed");
                DispatchOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Aggregated dispatch outcomes for the run summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    /// Artifacts uploaded
    pub published: usize,
    /// Artifacts skipped as pre-release builds
    pub not_eligible: usize,
    /// Artifacts skipped for a missing profile, credential file or artifact
    pub missing_input: usize,
    /// Artifacts whose upload failed
    pub failed: usize,
    /// File name and reason of every failure
    pub failures: Vec<(String, String)>,
}

impl DispatchReport {
    /// Summarize dispatch results
    pub fn from_results(results: &[DispatchResult]) -> Self {
        let mut report = Self::default();

        for result in results {
            match &result.outcome {
                DispatchOutcome::Published => report.published += 1,
                DispatchOutcome::SkippedNotEligible => report.not_eligible += 1,
                DispatchOutcome::SkippedMissingArtifact(_) => report.missing_input += 1,
                DispatchOutcome::Failed(reason) => {
                    report.failed += 1;
                    report
                        .failures
                        .push((result.artifact.file_name.clone(), reason.clone()));
                }
            }
        }

        report
    }

    /// Number of artifacts covered by the report
    pub fn total(&self) -> usize {
        self.published + self.skipped() + self.failed
    }

    /// Artifacts skipped for any reason
    pub fn skipped(&self) -> usize {
        self.not_eligible + self.missing_input
    }

    /// Whether any upload failed
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
