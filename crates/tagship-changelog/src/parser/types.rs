//! Parser configuration types

use std::collections::HashSet;

/// Configuration for the commit parser
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Commit types to leave out
    pub exclude_types: HashSet<String>,
    /// Keep commits without a conventional type
    pub include_untyped: bool,
    /// Keep merge commits
    pub include_merges: bool,
}

impl ParserConfig {
    /// Add a type to exclude
    pub fn exclude_type(mut self, type_name: impl Into<String>) -> Self {
        self.exclude_types.insert(type_name.into());
        self
    }

    /// Set whether to include untyped commits
    pub fn with_untyped(mut self, include: bool) -> Self {
        self.include_untyped = include;
        self
    }

    /// Set whether to include merge commits
    pub fn with_merges(mut self, include: bool) -> Self {
        self.include_merges = include;
        self
    }
}
