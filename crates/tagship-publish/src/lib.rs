//! Tagship Publish - Artifact dispatch to credential profiles
//!
//! Resolves which `*.pypirc` credential profile a run uses, enumerates the
//! build output, filters out pre-release builds and uploads every eligible
//! artifact at most once, reporting one outcome per artifact.

pub mod artifact;
pub mod build;
pub mod dispatch;
pub mod profile;
pub mod publisher;

pub use artifact::{Artifact, ArtifactSet, PrereleaseFilter};
pub use build::PackageBuilder;
pub use dispatch::{DispatchOutcome, DispatchReport, DispatchResult, MissingInput, PublishDispatcher};
pub use profile::{discover_profiles, AcceptDefault, CredentialProfile, ProfilePrompt, ProfileResolver};
pub use publisher::{Publisher, TwinePublisher};
