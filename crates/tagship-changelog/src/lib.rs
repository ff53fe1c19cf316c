//! Tagship Changelog - Changelog generation from commit history
//!
//! Commits are parsed as Conventional Commits, grouped into the sections
//! configured under `changelog.types` and rendered as a markdown entry.

pub mod formatter;
pub mod generator;
pub mod parser;
pub mod types;

pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use parser::{CommitParser, ConventionalParser, ParserConfig};
pub use types::{ChangelogEntry, Footer, ParsedCommit, Section};
