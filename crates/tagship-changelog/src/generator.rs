//! Changelog generation

use tagship_core::config::ChangelogConfig;
use tagship_git::CommitInfo;
use tracing::{debug, info, instrument};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::parser::{CommitParser, ConventionalParser, ParserConfig};
use crate::types::{ChangelogEntry, UNTYPED_SECTION};

/// Changelog generator
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    formatter: Box<dyn ChangelogFormatter>,
    config: ChangelogConfig,
}

impl ChangelogGenerator {
    /// Create a generator with the conventional parser and markdown output
    pub fn new(config: ChangelogConfig) -> Self {
        let parser = ConventionalParser::with_config(
            ParserConfig::default().with_untyped(config.include_untyped),
        );

        Self {
            parser: Box::new(parser),
            formatter: Box::new(MarkdownFormatter::new()),
            config,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Build a changelog entry from commits, newest first
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(&self, version: &str, commits: &[CommitInfo]) -> ChangelogEntry {
        info!(version, commit_count = commits.len(), "generating changelog entry");
        let mut entry = ChangelogEntry::new(version);

        let parsed = commits
            .iter()
            .filter_map(|c| self.parser.parse(c))
            .filter(|c| self.parser.should_include(c));

        for commit in parsed {
            if commit.breaking {
                entry.add_breaking_change(commit.clone());
            }

            let title = match &commit.commit_type {
                None => UNTYPED_SECTION.to_string(),
                Some(t) => match self.config.types.get(t) {
                    Some(type_config) if type_config.hidden => continue,
                    Some(type_config) => type_config.section.clone(),
                    None if self.config.include_untyped => UNTYPED_SECTION.to_string(),
                    None => continue,
                },
            };
            entry.push_to_section(&title, commit);
        }

        entry.sections.sort_by_key(|s| section_rank(&s.title));

        debug!(
            section_count = entry.sections.len(),
            breaking_count = entry.breaking_changes.len(),
            "changelog sections built"
        );
        entry
    }

    /// Format a changelog entry to string
    pub fn format(&self, entry: &ChangelogEntry) -> String {
        self.formatter.format(entry, &self.config)
    }

    /// Generate and format in one step
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate_formatted(&self, version: &str, commits: &[CommitInfo]) -> String {
        let entry = self.generate(version, commits);
        let output = self.format(&entry);
        debug!(output_len = output.len(), "changelog formatted");
        output
    }
}

/// Well-known sections first, custom ones after, "Other Changes" last.
/// `sort_by_key` is stable, so custom sections keep first-seen order.
fn section_rank(title: &str) -> u8 {
    match title {
        "Features" => 0,
        "Bug Fixes" => 1,
        "Performance" => 2,
        "Documentation" => 3,
        UNTYPED_SECTION => 99,
        _ => 50,
    }
}
