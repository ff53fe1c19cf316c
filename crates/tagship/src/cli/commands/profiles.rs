//! Profiles command

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use tagship_core::config::load_config_or_default;
use tagship_publish::ProfileResolver;

use crate::cli::{output, Cli, OutputFormat};

/// List credential profiles
#[derive(Debug, Args)]
pub struct ProfilesCommand {}

#[derive(Serialize)]
struct ProfileListing {
    name: String,
    config_path: String,
    default: bool,
}

impl ProfilesCommand {
    /// Execute the profiles command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing profiles command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let resolver = ProfileResolver::from_config(&config.publish, &cwd);
        let profiles = resolver.discover()?;

        let listings: Vec<ProfileListing> = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| ProfileListing {
                name: p.name.clone(),
                config_path: p.config_path.display().to_string(),
                default: i == 0,
            })
            .collect();

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&listings)?);
            }
            OutputFormat::Text => {
                if listings.is_empty() {
                    output::warning(&format!(
                        "No *.{} files in {}",
                        config.publish.profile_extension,
                        resolver.dir().display()
                    ));
                    return Ok(());
                }

                println!("{}", output::header("Credential profiles"));
                println!();
                for listing in &listings {
                    let marker = if listing.default {
                        style(" (default)").dim().to_string()
                    } else {
                        String::new()
                    };
                    println!(
                        "  {}{}  {}",
                        style(&listing.name).yellow(),
                        marker,
                        style(&listing.config_path).dim()
                    );
                }
            }
        }

        Ok(())
    }
}
