//! Conventional Commits parser
//!
//! Parses summaries of the form `type(scope)!: description` and trailing
//! `Token: value` footers: https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use super::{CommitParser, ParserConfig};
use crate::types::{Footer, ParsedCommit};
use tagship_git::CommitInfo;

static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[a-zA-Z]+)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?: (?P<description>.+)$",
    )
    .expect("Invalid regex")
});

static FOOTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<token>BREAKING[ -]CHANGE|[A-Za-z-]+): (?P<value>.+)$")
        .expect("Invalid regex")
});

/// Parser for Conventional Commits format
#[derive(Debug, Clone, Default)]
pub struct ConventionalParser {
    config: ParserConfig,
}

impl ConventionalParser {
    /// Create a parser that drops merges and untyped commits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    fn parse_conventional(&self, commit: &CommitInfo) -> Option<ParsedCommit> {
        let caps = CONVENTIONAL_REGEX.captures(commit.message.trim())?;

        let (body, footers) = match commit.body.as_deref() {
            Some(body) => split_footers(body),
            None => (None, Vec::new()),
        };
        let breaking_footer = footers
            .iter()
            .any(|f| f.token == "BREAKING CHANGE" || f.token == "BREAKING-CHANGE");

        Some(ParsedCommit {
            hash: commit.hash.clone(),
            commit_type: Some(caps["type"].to_lowercase()),
            scope: caps.name("scope").map(|m| m.as_str().to_string()),
            breaking: caps.name("breaking").is_some() || breaking_footer,
            description: caps["description"].to_string(),
            body,
            footers,
            author: commit.author.clone(),
            timestamp: commit.timestamp,
        })
    }
}

/// Separate the free-form body from trailing footers
fn split_footers(body: &str) -> (Option<String>, Vec<Footer>) {
    let mut footers: Vec<Footer> = Vec::new();
    let mut text = Vec::new();

    for line in body.lines() {
        if let Some(caps) = FOOTER_REGEX.captures(line) {
            footers.push(Footer {
                token: caps["token"].to_string(),
                value: caps["value"].to_string(),
            });
        } else if !footers.is_empty() && line.starts_with(' ') {
            if let Some(last) = footers.last_mut() {
                last.value.push('\n');
                last.value.push_str(line.trim());
            }
        } else if footers.is_empty() {
            text.push(line);
        }
    }

    let text = text.join("\n").trim().to_string();
    ((!text.is_empty()).then_some(text), footers)
}

impl CommitParser for ConventionalParser {
    fn parse(&self, commit: &CommitInfo) -> Option<ParsedCommit> {
        if !self.config.include_merges && commit.message.starts_with("Merge ") {
            return None;
        }

        match self.parse_conventional(commit) {
            Some(parsed) => Some(parsed),
            None if self.config.include_untyped => Some(ParsedCommit::untyped(commit)),
            None => None,
        }
    }

    fn should_include(&self, commit: &ParsedCommit) -> bool {
        match &commit.commit_type {
            Some(t) => !self.config.exclude_types.contains(t),
            None => self.config.include_untyped,
        }
    }
}
