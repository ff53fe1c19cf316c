//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use tagship_core::config::{Config, DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_YAML, DEFAULT_PROFILE_EXTENSION};

use crate::cli::{output, Cli};

/// Initialize a new tagship configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));

        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let use_toml = if self.toml || self.yes {
            self.toml
        } else {
            let formats = ["yaml", "toml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            selection == 1
        };

        let config_path = if use_toml && config_path.extension().is_some_and(|e| e == "yaml") {
            config_path.with_extension("toml")
        } else {
            config_path
        };

        std::fs::write(&config_path, render_template(use_toml)?)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                style(config_path.display()).cyan()
            ));

            if !gitignore_covers_profiles(&cwd, DEFAULT_PROFILE_EXTENSION) {
                output::warning(&format!(
                    "Add {} to .gitignore so credential profiles are never committed",
                    style(format!("*.{}", DEFAULT_PROFILE_EXTENSION)).cyan()
                ));
            }

            println!();
            println!("Next steps:");
            println!("  1. Edit {} to customize your release workflow", config_path.display());
            println!("  2. Put one {} file per upload target next to it", style("<profile>.pypirc").cyan());
            println!("  3. Run {} to create your first release", style("tagship <profile>").cyan());
        }

        Ok(())
    }
}

/// The starter configuration, as YAML or converted to TOML
fn render_template(use_toml: bool) -> anyhow::Result<String> {
    if use_toml {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
        Ok(toml::to_string_pretty(&config)?)
    } else {
        Ok(DEFAULT_CONFIG_TEMPLATE.to_string())
    }
}

/// Whether `.gitignore` in `dir` has a pattern for credential profile files
fn gitignore_covers_profiles(dir: &Path, extension: &str) -> bool {
    let pattern = format!("*.{}", extension);
    std::fs::read_to_string(dir.join(".gitignore"))
        .map(|content| content.lines().any(|line| line.trim() == pattern))
        .unwrap_or(false)
}
