//! Changelog command

use clap::Args;
use console::style;
use tracing::info;

use tagship_changelog::ChangelogGenerator;
use tagship_core::config::load_config_or_default;
use tagship_core::workflow::write_changelog;
use tagship_git::GitRepo;

use crate::cli::{output, Cli, OutputFormat};

/// Preview or write the changelog for unreleased commits
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Version heading to use
    #[arg(long = "for-version", value_name = "VERSION")]
    pub for_version: Option<String>,

    /// Write to file (default: print to stdout)
    #[arg(short, long)]
    pub write: bool,

    /// Output file (defaults to configured changelog file)
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.for_version, write = self.write, "executing changelog command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;
        let repo = GitRepo::discover(&cwd)?;

        let latest_tag = repo.find_latest_tag(None)?;

        let version = self.for_version.clone().unwrap_or_else(|| "Unreleased".to_string());

        let commits = match &latest_tag {
            Some(tag) => repo.commits_since_tag(&tag.name)?,
            None => repo.all_commits()?,
        };

        if commits.is_empty() {
            if !cli.quiet {
                println!("{}", style("No commits found since last release.").yellow());
            }
            return Ok(());
        }

        let generator = ChangelogGenerator::new(config.changelog.clone());
        let entry = generator.generate(&version, &commits);
        let changelog = generator.format(&entry);

        if self.write {
            let output_path = self
                .output
                .clone()
                .unwrap_or_else(|| cwd.join(&config.changelog.file));

            write_changelog(&output_path, &changelog, true)?;

            if !cli.quiet {
                output::success(&format!(
                    "Changelog written to {}",
                    style(output_path.display()).cyan()
                ));
            }
        } else {
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
                OutputFormat::Text => println!("{}", changelog),
            }
        }

        Ok(())
    }
}
