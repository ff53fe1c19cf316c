//! Credential profile discovery and selection
//!
//! A profile is a `<name>.<ext>` file (by default `<name>.pypirc`) in the
//! profile directory. Exactly one profile, or none, is resolved per run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use tagship_core::config::PublishConfig;
use tagship_core::Result;

/// A named credential configuration authorizing uploads to one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialProfile {
    /// Profile name, unique within the profile directory
    pub name: String,
    /// Path of the credential file handed to the upload tool
    pub config_path: PathBuf,
}

impl CredentialProfile {
    /// Create a profile
    pub fn new(name: impl Into<String>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            config_path: config_path.into(),
        }
    }

    /// Whether the credential file currently exists
    pub fn config_exists(&self) -> bool {
        self.config_path.is_file()
    }
}

/// List the profiles in `dir`, in directory enumeration order
#[instrument(fields(dir = %dir.display()))]
pub fn discover_profiles(dir: &Path, extension: &str) -> Result<Vec<CredentialProfile>> {
    let mut profiles = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        match path.file_stem().and_then(|s| s.to_str()) {
            Some(name) if !name.is_empty() => {
                profiles.push(CredentialProfile::new(name, path.clone()));
            }
            _ => debug!(path = %path.display(), "skipping profile with unusable name"),
        }
    }

    debug!(count = profiles.len(), "discovered credential profiles");
    Ok(profiles)
}

/// Asks the operator to pick a profile
pub trait ProfilePrompt {
    /// Return the operator's answer; an empty answer selects `default`
    fn choose(&self, names: &[&str], default: &str) -> Result<String>;
}

/// Prompt that always takes the default (`--yes` and non-interactive runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefault;

impl ProfilePrompt for AcceptDefault {
    fn choose(&self, _names: &[&str], _default: &str) -> Result<String> {
        Ok(String::new())
    }
}

/// Resolves the single credential profile a run uses
pub struct ProfileResolver {
    dir: PathBuf,
    extension: String,
    prompt: Box<dyn ProfilePrompt>,
}

impl ProfileResolver {
    /// Create a resolver for `<dir>/<name>.<extension>` profiles
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            prompt: Box::new(AcceptDefault),
        }
    }

    /// Create a resolver from configuration; relative directories are taken
    /// from `root`
    pub fn from_config(config: &PublishConfig, root: &Path) -> Self {
        Self::new(root.join(&config.profile_dir), config.profile_extension.clone())
    }

    /// Use a custom prompt when several profiles are available
    pub fn with_prompt<P: ProfilePrompt + 'static>(mut self, prompt: P) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    /// Directory scanned for profiles
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Discover the profiles in the configured directory
    pub fn discover(&self) -> Result<Vec<CredentialProfile>> {
        discover_profiles(&self.dir, &self.extension)
    }

    /// The profile called `name`, whether or not its file exists
    pub fn profile_named(&self, name: &str) -> CredentialProfile {
        let file = format!("{}.{}", name, self.extension);
        CredentialProfile::new(name, self.dir.join(file))
    }

    /// Decide which profile this run uses.
    ///
    /// An explicit name wins and is not checked against `available`; a
    /// missing credential file is reported per artifact at dispatch time.
    /// Without one, a single available profile is used as is, several are
    /// offered at the prompt with the first discovered as default, and none
    /// resolves to `None`.
    #[instrument(skip(self, available), fields(available = available.len()))]
    pub fn resolve(
        &self,
        explicit: Option<&str>,
        available: &[CredentialProfile],
    ) -> Result<Option<CredentialProfile>> {
        if let Some(name) = explicit {
            info!(profile = name, "using explicitly named profile");
            return Ok(Some(self.profile_named(name)));
        }

        let profile = match available {
            [] => {
                warn!(dir = %self.dir.display(), "no credential profiles found");
                return Ok(None);
            }
            [only] => only.clone(),
            [first, ..] => {
                let names: Vec<&str> = available.iter().map(|p| p.name.as_str()).collect();
                let answer = self.prompt.choose(&names, &first.name)?;
                let answer = answer.trim();

                if answer.is_empty() {
                    first.clone()
                } else {
                    available
                        .iter()
                        .find(|p| p.name == answer)
                        .cloned()
                        .unwrap_or_else(|| self.profile_named(answer))
                }
            }
        };

        info!(profile = %profile.name, "resolved credential profile");
        Ok(Some(profile))
    }
}
