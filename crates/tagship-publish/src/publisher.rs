//! Upload of a single artifact

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, instrument};

use tagship_core::config::PublishConfig;
use tagship_core::error::PublishError;

/// Uploads one artifact using one credential configuration
pub trait Publisher {
    /// Publish `artifact` with the credentials in `config`
    fn publish(&self, artifact: &Path, config: &Path) -> Result<(), PublishError>;
}

impl<P: Publisher + ?Sized> Publisher for &P {
    fn publish(&self, artifact: &Path, config: &Path) -> Result<(), PublishError> {
        (**self).publish(artifact, config)
    }
}

/// Publisher backed by the `twine` CLI
#[derive(Debug, Clone)]
pub struct TwinePublisher {
    program: String,
    repository: Option<String>,
    dry_run: bool,
}

impl TwinePublisher {
    /// Create a publisher that uploads with `twine upload`
    pub fn new() -> Self {
        Self {
            program: "twine".to_string(),
            repository: None,
            dry_run: false,
        }
    }

    /// Create a publisher from the `publish` configuration section
    pub fn from_config(config: &PublishConfig) -> Self {
        Self::new()
            .with_repository(config.repository.clone())
            .dry_run(config.dry_run)
    }

    /// Run `twine check` instead of uploading
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Select a repository section inside the credential file (`-r`)
    pub fn with_repository(mut self, repository: Option<String>) -> Self {
        self.repository = repository;
        self
    }

    /// Use a different executable name
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn subcommand(&self) -> &'static str {
        if self.dry_run {
            "check"
        } else {
            "upload"
        }
    }

    /// Arguments passed to twine for one artifact
    pub fn args(&self, artifact: &Path, config: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![self.subcommand().into()];

        if !self.dry_run {
            args.push("--config-file".into());
            args.push(config.into());
            if let Some(repository) = &self.repository {
                args.push("-r".into());
                args.push(repository.into());
            }
        }

        args.push(artifact.into());
        args
    }

    fn locate(&self) -> Result<PathBuf, PublishError> {
        which::which(&self.program).map_err(|_| PublishError::ToolNotFound(self.program.clone()))
    }
}

impl Default for TwinePublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for TwinePublisher {
    #[instrument(skip(self), fields(artifact = %artifact.display(), dry_run = self.dry_run))]
    fn publish(&self, artifact: &Path, config: &Path) -> Result<(), PublishError> {
        let program = self.locate()?;
        let command = format!("{} {}", self.program, self.subcommand());
        debug!(program = %program.display(), "running {}", command);

        let start = std::time::Instant::now();
        let output = Command::new(&program)
            .args(self.args(artifact, config))
            .output()
            .map_err(|e| PublishError::SpawnFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        info!(
            command = %command,
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "twine finished"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(PublishError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(())
    }
}
