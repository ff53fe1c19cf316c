//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_git(config)?;
    validate_build(config)?;
    validate_publish(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.remote.is_empty() {
        return Err(invalid("git.remote", "remote cannot be empty").into());
    }

    if config.git.branch.is_empty() {
        return Err(invalid("git.branch", "branch cannot be empty").into());
    }

    if !config.git.tag_format.contains("{version}") {
        return Err(invalid("git.tag_format", "must contain {version} placeholder").into());
    }

    if !config.git.commit_message.contains("{version}") {
        return Err(invalid("git.commit_message", "must contain {version} placeholder").into());
    }

    Ok(())
}

fn validate_build(config: &Config) -> Result<()> {
    if config.build.enabled && config.build.command.is_empty() {
        return Err(invalid("build.command", "command cannot be empty").into());
    }

    if config.build.output_dir.as_os_str().is_empty() {
        return Err(invalid("build.output_dir", "output directory cannot be empty").into());
    }

    Ok(())
}

fn validate_publish(config: &Config) -> Result<()> {
    let ext = &config.publish.profile_extension;
    if ext.is_empty() {
        return Err(invalid("publish.profile_extension", "extension cannot be empty").into());
    }
    if ext.starts_with('.') {
        return Err(invalid(
            "publish.profile_extension",
            "extension must not start with a dot",
        )
        .into());
    }

    if let Err(e) = Regex::new(&config.publish.prerelease_pattern) {
        return Err(invalid("publish.prerelease_pattern", e.to_string()).into());
    }

    Ok(())
}
