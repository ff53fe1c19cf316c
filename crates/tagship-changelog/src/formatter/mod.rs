//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use tagship_core::config::ChangelogConfig;

use crate::types::ChangelogEntry;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render one changelog entry
    fn format(&self, entry: &ChangelogEntry, config: &ChangelogConfig) -> String;
}
