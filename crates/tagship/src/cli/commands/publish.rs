//! Publish command

use clap::Args;
use console::style;
use tracing::info;

use tagship_core::config::load_config_or_default;
use tagship_publish::TwinePublisher;

use crate::cli::prompt::TerminalPrompt;
use crate::cli::{output, Cli, OutputFormat};
use crate::workflow::publish_artifacts;

/// Publish the current build output
#[derive(Debug, Args)]
pub struct PublishCommand {
    /// Credential profile to publish with (`<PROFILE>.pypirc`)
    #[arg(value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Check artifacts with `twine check` instead of uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Accept the default profile without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl PublishCommand {
    /// Execute the publish command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(profile = ?self.profile, dry_run = self.dry_run, "executing publish command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let prompt = TerminalPrompt::new(self.yes || cli.format == OutputFormat::Json);
        let publisher = TwinePublisher::from_config(&config.publish)
            .dry_run(self.dry_run || config.publish.dry_run);

        let summary = publish_artifacts(&config, &cwd, self.profile.as_deref(), prompt, publisher)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text if !cli.quiet => {
                match &summary.profile {
                    Some(profile) => println!(
                        "{}",
                        output::key_value("Profile", &style(&profile.name).yellow().to_string())
                    ),
                    None => output::warning("No credential profile found; nothing was uploaded"),
                }
                output::dispatch_results(&summary.results);
                output::dispatch_report(&summary.report);
            }
            OutputFormat::Text => {}
        }

        Ok(())
    }
}
