//! CLI definition and command handling

pub mod commands;
pub mod output;
mod prompt;

use clap::{Parser, Subcommand};

use commands::{
    ChangelogCommand, CompletionsCommand, InitCommand, ProfilesCommand, PublishCommand,
    ReleaseCommand,
};

/// Tagship - tag, changelog, build and publish Python package releases
///
/// Without a subcommand, runs the release workflow. The optional PROFILE
/// names the credential file (`<PROFILE>.pypirc`) used for uploads.
#[derive(Debug, Parser)]
#[command(name = "tagship")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub release: ReleaseCommand,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tag, build and publish a release (the default)
    Release(ReleaseCommand),

    /// Publish existing build output without tagging or building
    Publish(PublishCommand),

    /// List the credential profiles that can be used for publishing
    Profiles(ProfilesCommand),

    /// Generate the changelog for unreleased commits
    Changelog(ChangelogCommand),

    /// Initialize a new tagship configuration
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            None => self.release.execute(&self),
            Some(Commands::Release(ref cmd)) => cmd.execute(&self),
            Some(Commands::Publish(ref cmd)) => cmd.execute(&self),
            Some(Commands::Profiles(ref cmd)) => cmd.execute(&self),
            Some(Commands::Changelog(ref cmd)) => cmd.execute(&self),
            Some(Commands::Init(ref cmd)) => cmd.execute(&self),
            Some(Commands::Completions(ref cmd)) => cmd.execute(&self),
        }
    }

    /// Whether human-readable progress should be printed
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text && !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_is_release() {
        let cli = Cli::try_parse_from(["tagship", "test", "--dry-run"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.release.profile.as_deref(), Some("test"));
        assert!(cli.release.dry_run);
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tagship"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.release.profile.is_none());
    }

    #[test]
    fn test_subcommand_with_global_flags() {
        let cli = Cli::try_parse_from(["tagship", "publish", "release", "-y", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Publish(cmd)) => {
                assert_eq!(cmd.profile.as_deref(), Some("release"));
                assert!(cmd.yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_release_version_flags() {
        let cli = Cli::try_parse_from([
            "tagship",
            "release",
            "--set-version",
            "1.2.0",
            "-m",
            "Spring release",
            "--no-build",
            "--allow-branch",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Release(cmd)) => {
                assert_eq!(cmd.set_version.as_deref(), Some("1.2.0"));
                assert_eq!(cmd.message.as_deref(), Some("Spring release"));
                assert!(cmd.no_build);
                assert!(cmd.allow_branch);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
