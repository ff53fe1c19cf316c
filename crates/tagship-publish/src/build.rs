//! Package build step

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, instrument};

use tagship_core::config::BuildConfig;
use tagship_core::error::AdapterError;
use tagship_core::Result;

/// Runs the configured build command to produce release artifacts
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    command: Vec<String>,
    output_dir: PathBuf,
    clean: bool,
}

impl PackageBuilder {
    /// Create a builder from the `build` configuration section
    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            command: config.command.clone(),
            output_dir: config.output_dir.clone(),
            clean: config.clean,
        }
    }

    /// The output directory for a project rooted at `root`
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    /// The build command as one string, for messages
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }

    /// Build the package in `root`, returning the output directory
    #[instrument(skip(self), fields(root = %root.display(), command = %self.command_line()))]
    pub fn build(&self, root: &Path) -> Result<PathBuf> {
        let output_dir = self.output_dir(root);
        if self.clean && output_dir.exists() {
            debug!(output_dir = %output_dir.display(), "removing previous build output");
            std::fs::remove_dir_all(&output_dir).map_err(AdapterError::Io)?;
        }

        let (program, args) = self.command.split_first().ok_or_else(|| AdapterError::CommandFailed {
            command: String::new(),
            reason: "build command is empty".to_string(),
        })?;

        let start = std::time::Instant::now();
        let output = Command::new(program)
            .args(args)
            .current_dir(root)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => AdapterError::ToolNotFound(program.clone()),
                _ => AdapterError::CommandFailed {
                    command: self.command_line(),
                    reason: e.to_string(),
                },
            })?;

        debug!(stdout = %String::from_utf8_lossy(&output.stdout), "build output");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AdapterError::CommandFailed {
                command: self.command_line(),
                reason: format!("{}: {}", output.status, stderr.trim()),
            }
            .into());
        }

        info!(duration_ms = start.elapsed().as_millis(), "build finished");
        Ok(output_dir)
    }
}
