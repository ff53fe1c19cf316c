//! Tag operations

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use tagship_core::error::GitError;

impl GitRepo {
    /// Get all tags
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            if let Ok(commit) = self.repo.find_commit(oid) {
                tags.push(TagInfo::new(&name, commit.id().to_string()));
            } else if let Ok(tag) = self.repo.find_tag(oid) {
                // Annotated tag
                let mut tag_info = TagInfo::new(&name, tag.target_id().to_string());
                if let Some(msg) = tag.message() {
                    tag_info = tag_info.with_message(msg);
                }
                tags.push(tag_info);
            }

            true
        })?;

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Get tags matching a pattern
    pub fn tags_matching(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        let regex = Regex::new(pattern).map_err(|e| GitError::InvalidTagPattern(e.to_string()))?;

        Ok(self
            .tags()?
            .into_iter()
            .filter(|t| regex.is_match(&t.name))
            .collect())
    }

    /// Find the latest tag by version ordering
    #[instrument(skip(self), fields(pattern))]
    pub fn find_latest_tag(&self, pattern: Option<&str>) -> Result<Option<TagInfo>> {
        let tags = match pattern {
            Some(p) => self.tags_matching(p)?,
            None => self.tags()?,
        };

        let result = tags
            .into_iter()
            .filter_map(|t| {
                let key = t.version.as_deref().and_then(version_sort_key)?;
                Some((t, key))
            })
            .max_by(|a, b| a.1.cmp(&b.1))
            .map(|(t, _)| t);

        debug!(latest = ?result.as_ref().map(|t| &t.name), "found latest tag");
        Ok(result)
    }

    /// Find a specific tag by name
    pub fn find_tag(&self, name: &str) -> Result<Option<TagInfo>> {
        let tag_ref = format!("refs/tags/{}", name);

        match self.repo.find_reference(&tag_ref) {
            Ok(reference) => {
                let target = reference.peel_to_commit()?;
                Ok(Some(TagInfo::new(name, target.id().to_string())))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Create a tag on HEAD, annotated when a message is given
    #[instrument(skip(self), fields(name, annotated = message.is_some()))]
    pub fn create_tag(&self, name: &str, message: Option<&str>) -> Result<TagInfo> {
        if self.find_tag(name)?.is_some() {
            return Err(GitError::TagExists(name.to_string()));
        }

        let head = self.head_commit()?;

        let mut info = TagInfo::new(name, head.id().to_string());
        if let Some(msg) = message {
            let sig = self.repo.signature()?;
            self.repo.tag(name, head.as_object(), &sig, msg, false)?;
            info = info.with_message(msg);
        } else {
            self.repo.tag_lightweight(name, head.as_object(), false)?;
        }

        info!(name, annotated = message.is_some(), "created tag");
        Ok(info)
    }
}

/// PEP 440 version: release segments, then an optional pre-release
/// (`a`, `b`, `rc` and their spellings), post-release, dev release and
/// local label
static PEP440: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d+(?:\.\d+)*)(?:[._-]?(alpha|a|beta|b|preview|pre|rc|c)[._-]?(\d*))?(?:[._-]?(post|rev|r)[._-]?(\d*)|-(\d+))?(?:[._-]?dev[._-]?(\d*))?(?:\+[a-z0-9]+(?:[._-][a-z0-9]+)*)?$",
    )
    .expect("Invalid regex")
});

/// Ordering key for a tag version.
///
/// Fields compare in declaration order, which gives the PEP 440 order
/// `1.0.dev0 < 1.0a1 < 1.0b2.post1 < 1.0rc1 < 1.0 < 1.0.post1.dev0 < 1.0.post1`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct VersionKey {
    /// Release segments without trailing zeros, so `1.0 == 1.0.0`
    release: Vec<u64>,
    /// Pre-release phase and number; a bare dev release sorts before any
    /// pre-release and a final release after all of them
    pre: (u8, u64),
    /// Post-release number plus one, zero when absent
    post: u64,
    /// Dev number, `u64::MAX` when absent
    dev: u64,
}

fn version_sort_key(version: &str) -> Option<VersionKey> {
    let caps = PEP440.captures(version)?;
    let number = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    let mut release = caps[1]
        .split('.')
        .map(str::parse)
        .collect::<std::result::Result<Vec<u64>, _>>()
        .ok()?;
    while release.len() > 1 && release.last() == Some(&0) {
        release.pop();
    }

    let is_post = caps.get(4).is_some() || caps.get(6).is_some();
    let is_dev = caps.get(7).is_some();

    let pre = match caps.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(phase) => {
            let rank = match phase.as_str() {
                "a" | "alpha" => 1,
                "b" | "beta" => 2,
                _ => 3,
            };
            (rank, number(3))
        }
        None if is_dev && !is_post => (0, 0),
        None => (4, 0),
    };
    let post = if is_post {
        number(if caps.get(4).is_some() { 5 } else { 6 }).saturating_add(1)
    } else {
        0
    };
    let dev = if is_dev { number(7) } else { u64::MAX };

    Some(VersionKey {
        release,
        pre,
        post,
        dev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo_with_tag() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();

        std::fs::write(temp.path().join("file.txt"), "content").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();

        let commit = repo.find_commit(oid).unwrap();
        repo.tag_lightweight("v1.0.0", commit.as_object(), false)
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_list_tags() {
        let (_temp, repo) = setup_repo_with_tag();
        let tags = repo.tags().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "v1.0.0");
    }

    #[test]
    fn test_find_tag() {
        let (_temp, repo) = setup_repo_with_tag();
        let tag = repo.find_tag("v1.0.0").unwrap();
        assert_eq!(tag.unwrap().version, Some("1.0.0".to_string()));
        assert!(repo.find_tag("v9.9.9").unwrap().is_none());
    }

    #[test]
    fn test_find_latest_tag_orders_python_versions() {
        let (_temp, repo) = setup_repo_with_tag();
        repo.create_tag("v1.1", None).unwrap();
        repo.create_tag("v1.0.5", None).unwrap();
        repo.create_tag("v1.2.0.dev0", None).unwrap();

        let latest = repo.find_latest_tag(None).unwrap().unwrap();
        assert_eq!(latest.name, "v1.2.0.dev0");

        let stable = repo.find_latest_tag(Some(r"^v\d+\.\d+(\.\d+)?$")).unwrap().unwrap();
        assert_eq!(stable.name, "v1.1");
    }

    #[test]
    fn test_create_annotated_tag() {
        let (_temp, repo) = setup_repo_with_tag();
        let tag = repo.create_tag("v2.0.0", Some("Release 2.0.0")).unwrap();
        assert_eq!(tag.name, "v2.0.0");

        let listed = repo
            .tags()
            .unwrap()
            .into_iter()
            .find(|t| t.name == "v2.0.0")
            .unwrap();
        assert_eq!(listed.message.as_deref(), Some("Release 2.0.0"));
    }

    #[test]
    fn test_tag_already_exists() {
        let (_temp, repo) = setup_repo_with_tag();
        let result = repo.create_tag("v1.0.0", None);
        assert!(matches!(result, Err(GitError::TagExists(_))));
    }

    #[test]
    fn test_version_sort_key() {
        let key = |v: &str| version_sort_key(v).unwrap();

        assert!(key("1.0") < key("1.0.1"));
        assert_eq!(key("1.0"), key("1.0.0"));
        assert!(version_sort_key("abc").is_none());

        let ordered = [
            "1.0.dev0",
            "1.0a1.dev1",
            "1.0a1",
            "1.0b2.post1",
            "1.0rc1",
            "1.0",
            "1.0.post1.dev0",
            "1.0.post1",
            "1.0.1",
        ];
        for pair in ordered.windows(2) {
            assert!(key(pair[0]) < key(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_version_sort_key_spellings() {
        let key = |v: &str| version_sort_key(v).unwrap();

        assert!(key("1.1rc1") < key("1.1"));
        assert!(key("2.0a1") < key("2.0b1"));
        assert_eq!(key("1.0.0-rc.1"), key("1.0.0rc1"));
        assert_eq!(key("1.0-1"), key("1.0.post1"));
        assert_eq!(key("1.0+local.7"), key("1.0"));
        assert!(key("1.0.0.post1") > key("1.0.0"));
    }

    #[test]
    fn test_find_latest_tag_with_post_and_rc_tags() {
        let (_temp, repo) = setup_repo_with_tag();
        repo.create_tag("v1.0.0.post1", None).unwrap();
        repo.create_tag("v1.1rc1", None).unwrap();
        assert_eq!(repo.find_latest_tag(None).unwrap().unwrap().name, "v1.1rc1");

        let finals = repo.find_latest_tag(Some(r"^v[\d.]+(\.post\d+)?$")).unwrap().unwrap();
        assert_eq!(finals.name, "v1.0.0.post1");
    }
}
