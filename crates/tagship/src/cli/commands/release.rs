//! Release command

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;

use tagship_core::config::load_config_or_default;
use tagship_core::workflow::{format_tag, render_message, validate_version};
use tagship_git::GitRepo;
use tagship_publish::TwinePublisher;

use crate::cli::prompt::TerminalPrompt;
use crate::cli::{output, Cli, OutputFormat};
use crate::workflow::{check_preconditions, latest_version, ReleaseOptions, ReleaseOutcome, ReleaseWorkflow};

/// Tag, build and publish a release
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    /// Credential profile to publish with (`<PROFILE>.pypirc`)
    #[arg(value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Version to release (prompted for when omitted)
    #[arg(long = "set-version", value_name = "VERSION")]
    pub set_version: Option<String>,

    /// Tag message (prompted for when omitted)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Dry run - change nothing and check artifacts instead of uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Skip changelog generation
    #[arg(long)]
    pub no_changelog: bool,

    /// Skip git operations (commit, tag, push)
    #[arg(long)]
    pub no_git: bool,

    /// Release from the checked-out branch instead of `git.branch`
    #[arg(long)]
    pub allow_branch: bool,

    /// Skip the package build
    #[arg(long)]
    pub no_build: bool,

    /// Skip publishing
    #[arg(long)]
    pub no_publish: bool,

    /// Accept defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            profile = ?self.profile,
            version = ?self.set_version,
            dry_run = self.dry_run,
            no_changelog = self.no_changelog,
            no_git = self.no_git,
            allow_branch = self.allow_branch,
            no_build = self.no_build,
            no_publish = self.no_publish,
            "executing release command"
        );
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd)?;

        if config_path.is_none() && cli.is_text() {
            output::warning(&format!(
                "No configuration found, using defaults. Run {} to create one.",
                style("tagship init").cyan()
            ));
        }

        let repo = GitRepo::discover(&cwd)?;
        if !self.dry_run && !self.no_git {
            check_preconditions(&config, &repo, self.allow_branch)?;
        }

        let prompt = TerminalPrompt::new(self.yes || cli.format == OutputFormat::Json);
        let (_, current_version) = latest_version(&repo)?;

        let version = match &self.set_version {
            Some(v) => v.clone(),
            None => prompt.text("Version", &current_version)?,
        };
        validate_version(&version)?;

        let message = match &self.message {
            Some(m) => m.clone(),
            None => prompt.text("Tag message", &render_message(&config.git.tag_message, &version))?,
        };
        let tag = format_tag(&config, &version);

        if cli.is_text() {
            println!("{}", output::header("Release Preview"));
            println!();
            println!("{}", output::key_value("Current version", &style(&current_version).cyan().to_string()));
            println!("{}", output::key_value("Next version", &style(&version).green().bold().to_string()));
            println!("{}", output::key_value("Tag", &style(&tag).yellow().to_string()));
            println!();

            if self.dry_run {
                println!("  {}", style("[DRY RUN - no changes will be made]").yellow().bold());
                println!();
            }
        }

        if prompt.is_interactive() && !self.dry_run {
            let confirmed = Confirm::new()
                .with_prompt("Proceed with release?")
                .default(true)
                .interact()?;

            if !confirmed {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let options = ReleaseOptions {
            version: version.clone(),
            message,
            profile: self.profile.clone(),
            dry_run: self.dry_run,
            skip_changelog: self.no_changelog,
            skip_git: self.no_git,
            allow_branch: self.allow_branch,
            skip_build: self.no_build,
            skip_publish: self.no_publish,
        };
        let publisher = TwinePublisher::from_config(&config.publish)
            .dry_run(self.dry_run || config.publish.dry_run);

        let workflow = ReleaseWorkflow::new(&config, &cwd, options);
        let outcome = workflow.execute(&repo, prompt, publisher)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
            OutputFormat::Text if !cli.quiet => print_outcome(&outcome),
            OutputFormat::Text => {}
        }

        Ok(())
    }
}

fn print_outcome(outcome: &ReleaseOutcome) {
    let release = &outcome.release;

    for step in &release.completed {
        output::success(&format!("{}", step));
    }
    for note in &release.notes {
        output::info(note);
    }

    if let Some(summary) = &outcome.publish {
        println!();
        match &summary.profile {
            Some(profile) => output::info(&format!("Publishing with profile {}", style(&profile.name).yellow())),
            None => output::warning("No credential profile found; nothing was uploaded"),
        }
        output::dispatch_results(&summary.results);
        output::dispatch_report(&summary.report);
    }

    println!();
    let version = style(&release.new_version).green().bold();
    if release.dry_run {
        output::success(&format!("Dry run complete. Version {} would be released.", version));
    } else {
        output::success(&format!("Released version {}", version));
    }
}
