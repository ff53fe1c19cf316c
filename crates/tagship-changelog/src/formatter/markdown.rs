//! Markdown changelog formatter

use std::fmt::Write;

use tagship_core::config::ChangelogConfig;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{ChangelogEntry, ParsedCommit};

/// Renders `## [version] - date` entries with one `###` heading per section
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn write_item(out: &mut String, commit: &ParsedCommit, config: &ChangelogConfig) {
        out.push_str("- ");
        if let Some(scope) = &commit.scope {
            let _ = write!(out, "**{}:** ", scope);
        }
        out.push_str(&commit.description);

        if config.include_hashes {
            let _ = write!(out, " ({})", commit.short_hash());
        }
        if config.include_authors {
            let _ = write!(out, " - {}", commit.author);
        }
        out.push('\n');
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, entry, config), fields(version = %entry.version, section_count = entry.sections.len()))]
    fn format(&self, entry: &ChangelogEntry, config: &ChangelogConfig) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "## [{}] - {}\n",
            entry.version,
            entry.date.format("%Y-%m-%d")
        );

        if !entry.breaking_changes.is_empty() {
            output.push_str("### ⚠ BREAKING CHANGES\n\n");
            for commit in &entry.breaking_changes {
                Self::write_item(&mut output, commit, config);
            }
            output.push('\n');
        }

        for section in entry.sections.iter().filter(|s| !s.is_empty()) {
            let _ = writeln!(output, "### {}\n", section.title);
            for commit in &section.commits {
                Self::write_item(&mut output, commit, config);
            }
            output.push('\n');
        }

        if entry.is_empty() {
            output.push_str("No notable changes.\n\n");
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}
