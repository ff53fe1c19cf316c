//! Release workflow orchestration
//!
//! Stamps the version, writes the changelog, commits, tags and pushes, builds
//! the package and hands the build output to the dispatch core. Git, build
//! and configuration problems abort the run; per-artifact problems end up in
//! the dispatch report.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use tagship_changelog::ChangelogGenerator;
use tagship_core::config::Config;
use tagship_core::error::{GitError, Result};
use tagship_core::workflow::{format_tag, render_message, stamp_version, validate_version, write_changelog};
use tagship_core::{ReleaseResult, ReleaseStep};
use tagship_git::{GitRepo, TagInfo};
use tagship_publish::{
    ArtifactSet, CredentialProfile, DispatchReport, DispatchResult, PackageBuilder,
    PrereleaseFilter, ProfilePrompt, ProfileResolver, PublishDispatcher, Publisher,
};

/// Options for a release
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    /// Version to release
    pub version: String,
    /// Tag message
    pub message: String,
    /// Credential profile named on the command line
    pub profile: Option<String>,
    /// Change nothing in the repository and only check artifacts
    pub dry_run: bool,
    /// Skip changelog generation
    pub skip_changelog: bool,
    /// Skip commit, tag and push
    pub skip_git: bool,
    /// Release from whatever branch is checked out instead of `git.branch`
    pub allow_branch: bool,
    /// Skip the package build
    pub skip_build: bool,
    /// Skip publishing
    pub skip_publish: bool,
}

/// Profile and per-artifact outcomes of a dispatch run
#[derive(Debug, Clone, Serialize)]
pub struct PublishSummary {
    /// The profile used, if one resolved
    pub profile: Option<CredentialProfile>,
    /// One result per artifact, in enumeration order
    pub results: Vec<DispatchResult>,
    /// Aggregated counts
    pub report: DispatchReport,
}

/// Everything a release run produced
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseOutcome {
    /// Release metadata and completed steps
    #[serde(flatten)]
    pub release: ReleaseResult,
    /// Dispatch outcomes, when publishing ran
    pub publish: Option<PublishSummary>,
}

/// Fail unless the working tree is clean, when the configuration asks for it
pub fn ensure_clean(config: &Config, repo: &GitRepo) -> Result<()> {
    if config.git.require_clean && !repo.is_clean()? {
        let dirty = repo.dirty_files()?;
        debug!(?dirty, "working tree has changes");
        return Err(GitError::DirtyWorkingDirectory.into());
    }
    Ok(())
}

/// Check the repository before anything is changed: a clean tree (when
/// `git.require_clean`) and HEAD on `git.branch` unless `allow_branch`.
/// Returns the branch to push.
pub fn check_preconditions(config: &Config, repo: &GitRepo, allow_branch: bool) -> Result<String> {
    ensure_clean(config, repo)?;
    Ok(repo.release_branch(&config.git.branch, allow_branch)?)
}

/// The version of the most recent release tag, `0.0.0` when untagged
pub fn latest_version(repo: &GitRepo) -> Result<(Option<TagInfo>, String)> {
    let latest = repo.find_latest_tag(None)?;
    let version = latest
        .as_ref()
        .and_then(|t| t.version.clone())
        .unwrap_or_else(|| "0.0.0".to_string());
    Ok((latest, version))
}

/// Resolve a profile, enumerate the build output and dispatch every artifact
#[instrument(skip_all, fields(root = %root.display(), explicit = ?explicit))]
pub fn publish_artifacts<Q, P>(
    config: &Config,
    root: &Path,
    explicit: Option<&str>,
    prompt: Q,
    publisher: P,
) -> Result<PublishSummary>
where
    Q: ProfilePrompt + 'static,
    P: Publisher,
{
    let resolver = ProfileResolver::from_config(&config.publish, root).with_prompt(prompt);
    let available = if explicit.is_some() {
        Vec::new()
    } else {
        match resolver.discover() {
            Ok(profiles) => profiles,
            Err(e) => {
                warn!(dir = %resolver.dir().display(), error = %e, "cannot read profile directory");
                Vec::new()
            }
        }
    };
    let profile = resolver.resolve(explicit, &available)?;

    let artifacts = ArtifactSet::enumerate(&root.join(&config.build.output_dir))?;
    let filter = PrereleaseFilter::new(&config.publish.prerelease_pattern)?;
    let dispatcher = PublishDispatcher::new(publisher, filter);

    let results = dispatcher.dispatch_all(artifacts.as_slice(), profile.as_ref());
    let report = DispatchReport::from_results(&results);
    info!(
        published = report.published,
        skipped = report.skipped(),
        failed = report.failed,
        "dispatch finished"
    );

    Ok(PublishSummary {
        profile,
        results,
        report,
    })
}

/// Execute a release workflow
pub struct ReleaseWorkflow<'a> {
    config: &'a Config,
    root: PathBuf,
    options: ReleaseOptions,
}

impl<'a> ReleaseWorkflow<'a> {
    /// Create a workflow for the project at `root`
    pub fn new(config: &'a Config, root: impl Into<PathBuf>, options: ReleaseOptions) -> Self {
        Self {
            config,
            root: root.into(),
            options,
        }
    }

    /// Check if this is a dry run
    pub fn is_dry_run(&self) -> bool {
        self.options.dry_run
    }

    fn package_name(&self) -> String {
        self.config
            .name
            .clone()
            .or_else(|| {
                self.root
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "package".to_string())
    }

    /// Run every step in order
    #[instrument(skip_all, fields(version = %self.options.version, dry_run = self.options.dry_run))]
    pub fn execute<Q, P>(&self, repo: &GitRepo, prompt: Q, publisher: P) -> Result<ReleaseOutcome>
    where
        Q: ProfilePrompt + 'static,
        P: Publisher,
    {
        let version = self.options.version.trim();
        validate_version(version)?;

        let branch = if self.options.skip_git || self.is_dry_run() {
            None
        } else {
            Some(check_preconditions(self.config, repo, self.options.allow_branch)?)
        };

        let (latest, previous) = latest_version(repo)?;
        let tag = format_tag(self.config, version);
        let mut result = ReleaseResult::new(self.package_name(), version, &tag)
            .with_previous_version(latest.as_ref().map(|_| previous.clone()))
            .with_dry_run(self.is_dry_run());

        info!(previous = %previous, tag = %tag, "executing release workflow");

        let mut changed = self.stamp_versions(version, &mut result)?;
        if let Some(path) = self.write_changelog(repo, latest.as_ref(), version, &mut result)? {
            changed.push(path);
        }

        if let Some(branch) = &branch {
            self.commit_tag_push(repo, version, &tag, branch, &changed, &mut result)?;
        }

        if self.config.build.enabled && !self.options.skip_build {
            let builder = PackageBuilder::from_config(&self.config.build);
            builder.build(&self.root)?;
            result.complete(ReleaseStep::Build);
        }

        let publish = if self.config.publish.enabled && !self.options.skip_publish {
            let summary = publish_artifacts(
                self.config,
                &self.root,
                self.options.profile.as_deref(),
                prompt,
                publisher,
            )?;
            result.profile = summary.profile.as_ref().map(|p| p.name.clone());
            result.complete(ReleaseStep::Publish);
            Some(summary)
        } else {
            None
        };

        debug!(completed = ?result.completed, "release workflow complete");
        Ok(ReleaseOutcome {
            release: result,
            publish,
        })
    }

    fn stamp_versions(&self, version: &str, result: &mut ReleaseResult) -> Result<Vec<PathBuf>> {
        let mut changed = Vec::new();
        if self.is_dry_run() {
            return Ok(changed);
        }

        for file in &self.config.version.files {
            let path = self.root.join(file);
            if stamp_version(&path, version)? {
                changed.push(path);
            }
        }

        if !self.config.version.files.is_empty() {
            result.complete(ReleaseStep::StampVersion);
        }
        Ok(changed)
    }

    fn write_changelog(
        &self,
        repo: &GitRepo,
        latest: Option<&TagInfo>,
        version: &str,
        result: &mut ReleaseResult,
    ) -> Result<Option<PathBuf>> {
        if !self.config.changelog.enabled || self.options.skip_changelog {
            return Ok(None);
        }

        let commits = match latest {
            Some(tag) => repo.commits_since_tag(&tag.name)?,
            None => repo.all_commits()?,
        };
        let generator = ChangelogGenerator::new(self.config.changelog.clone());
        let content = generator.generate_formatted(version, &commits);

        if self.is_dry_run() {
            result.add_note(format!("changelog entry not written ({} commits)", commits.len()));
            return Ok(None);
        }

        let path = self.root.join(&self.config.changelog.file);
        write_changelog(&path, &content, true)?;
        result.complete(ReleaseStep::Changelog);
        Ok(Some(path))
    }

    fn commit_tag_push(
        &self,
        repo: &GitRepo,
        version: &str,
        tag: &str,
        branch: &str,
        changed: &[PathBuf],
        result: &mut ReleaseResult,
    ) -> Result<()> {
        let git = &self.config.git;

        if !changed.is_empty() {
            let message = render_message(&git.commit_message, version);
            if repo.commit_paths(changed, &message)?.is_some() {
                result.complete(ReleaseStep::Commit);
            }
        }

        if repo.find_tag(tag)?.is_some() {
            warn!(tag, "tag already exists, reusing it");
            result.add_note(format!("tag {} already existed and was reused", tag));
        } else {
            repo.create_tag(tag, Some(&self.options.message))?;
            result.complete(ReleaseStep::Tag);
        }

        if git.push {
            repo.push_with_tags(&git.remote, branch)?;
            result.complete(ReleaseStep::Push);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, RepositoryInitOptions, Signature};
    use std::cell::RefCell;
    use tagship_core::error::PublishError;
    use tagship_core::TagshipError;
    use tagship_publish::{AcceptDefault, DispatchOutcome, MissingInput};
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingPublisher {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl Publisher for RecordingPublisher {
        fn publish(&self, artifact: &Path, _config: &Path) -> std::result::Result<(), PublishError> {
            self.calls.borrow_mut().push(artifact.to_path_buf());
            Ok(())
        }
    }

    fn commit_all(repo: &Repository, message: &str) {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let mut index = repo.index().unwrap();
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    /// A project on `main`, tagged v0.1.0 with one feature and one fix since
    fn setup_project() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo =
            Repository::init_opts(temp.path(), RepositoryInitOptions::new().initial_head("main"))
                .unwrap();
        let mut git_config = repo.config().unwrap();
        git_config.set_str("user.name", "Test").unwrap();
        git_config.set_str("user.email", "test@example.com").unwrap();

        std::fs::create_dir(temp.path().join("numeral")).unwrap();
        std::fs::write(
            temp.path().join("numeral").join("__init__.py"),
            "__version__ = '0.1.0'\n",
        )
        .unwrap();
        std::fs::write(temp.path().join(".gitignore"), "dist/\n*.pypirc\n").unwrap();
        commit_all(&repo, "Initial commit");
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.tag_lightweight("v0.1.0", head.as_object(), false).unwrap();

        std::fs::write(temp.path().join("README.md"), "numeral\n").unwrap();
        commit_all(&repo, "feat: add roman numeral parser");
        std::fs::write(temp.path().join("README.md"), "numeral parser\n").unwrap();
        commit_all(&repo, "fix: reject empty input");

        std::fs::write(temp.path().join("release.pypirc"), "[distutils]\n").unwrap();

        let git_repo = GitRepo::discover(temp.path()).unwrap();
        (temp, git_repo)
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.name = Some("numeral".to_string());
        config.git.push = false;
        config.version.files = vec![PathBuf::from("numeral/__init__.py")];
        config.build.command = vec![
            "sh".to_string(),
            "-c".to_string(),
            "mkdir -p dist && touch dist/numeral-0.2.0.tar.gz dist/numeral-0.2.0.dev0.tar.gz"
                .to_string(),
        ];
        config
    }

    /// Add a bare repository as `origin` and return it
    fn add_origin(project: &Path) -> TempDir {
        let remote = TempDir::new().unwrap();
        Repository::init_bare(remote.path()).unwrap();
        Repository::open(project)
            .unwrap()
            .remote("origin", remote.path().to_str().unwrap())
            .unwrap();
        remote
    }

    fn checkout_new_branch(project: &Path, name: &str) {
        let repo = Repository::open(project).unwrap();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.branch(name, &head, false).unwrap();
        repo.set_head(&format!("refs/heads/{}", name)).unwrap();
    }

    /// Configuration that only touches git
    fn git_only_config() -> Config {
        let mut config = config();
        config.git.push = true;
        config.build.enabled = false;
        config.publish.enabled = false;
        config
    }

    fn options(version: &str) -> ReleaseOptions {
        ReleaseOptions {
            version: version.to_string(),
            message: format!("Release {}", version),
            ..Default::default()
        }
    }

    #[test]
    fn test_latest_version_untagged() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        commit_all(&repo, "Initial commit");
        let repo = GitRepo::open(temp.path()).unwrap();

        let (latest, version) = latest_version(&repo).unwrap();
        assert!(latest.is_none());
        assert_eq!(version, "0.0.0");
    }

    #[cfg(unix)]
    #[test]
    fn test_full_release() {
        let (temp, repo) = setup_project();
        let config = config();
        let publisher = RecordingPublisher::default();

        let workflow = ReleaseWorkflow::new(&config, temp.path(), options("0.2.0"));
        let outcome = workflow.execute(&repo, AcceptDefault, &publisher).unwrap();
        let release = &outcome.release;

        assert_eq!(release.previous_version.as_deref(), Some("0.1.0"));
        assert_eq!(release.tag, "v0.2.0");
        assert_eq!(release.profile.as_deref(), Some("release"));
        for step in [
            ReleaseStep::StampVersion,
            ReleaseStep::Changelog,
            ReleaseStep::Commit,
            ReleaseStep::Tag,
            ReleaseStep::Build,
            ReleaseStep::Publish,
        ] {
            assert!(release.has_completed(step), "{} did not complete", step);
        }
        assert!(!release.has_completed(ReleaseStep::Push));

        let init = std::fs::read_to_string(temp.path().join("numeral/__init__.py")).unwrap();
        assert_eq!(init, "__version__ = '0.2.0'\n");

        let changelog = std::fs::read_to_string(temp.path().join("CHANGELOG.md")).unwrap();
        assert!(changelog.starts_with("## [0.2.0]"));
        assert!(changelog.contains("add roman numeral parser"));
        assert!(changelog.contains("reject empty input"));

        let head = repo.all_commits().unwrap();
        assert_eq!(head[0].message, "chore(release): 0.2.0");
        assert!(repo.find_tag("v0.2.0").unwrap().is_some());
        assert!(repo.is_clean().unwrap());

        let summary = outcome.publish.unwrap();
        assert_eq!(summary.results.len(), 2);
        assert_eq!(summary.report.published, 1);
        assert_eq!(summary.report.not_eligible, 1);
        for result in &summary.results {
            let expected = if result.artifact.file_name.contains(".dev0") {
                DispatchOutcome::SkippedNotEligible
            } else {
                DispatchOutcome::Published
            };
            assert_eq!(result.outcome, expected);
        }
        assert_eq!(publisher.calls.borrow().len(), 1);
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let (temp, repo) = setup_project();
        let mut config = config();
        config.build.enabled = false;

        let mut opts = options("0.2.0");
        opts.dry_run = true;
        opts.skip_publish = true;
        let workflow = ReleaseWorkflow::new(&config, temp.path(), opts);
        let outcome = workflow.execute(&repo, AcceptDefault, RecordingPublisher::default()).unwrap();

        assert!(outcome.release.dry_run);
        assert!(outcome.release.completed.is_empty());
        assert!(outcome.publish.is_none());
        assert!(!temp.path().join("CHANGELOG.md").exists());
        assert!(repo.find_tag("v0.2.0").unwrap().is_none());
        assert_eq!(repo.all_commits().unwrap().len(), 3);
    }

    #[test]
    fn test_existing_tag_reused() {
        let (temp, repo) = setup_project();
        let mut config = config();
        config.build.enabled = false;
        config.publish.enabled = false;
        config.changelog.enabled = false;
        config.version.files.clear();

        repo.create_tag("v0.2.0", None).unwrap();
        let workflow = ReleaseWorkflow::new(&config, temp.path(), options("0.2.0"));
        let outcome = workflow.execute(&repo, AcceptDefault, RecordingPublisher::default()).unwrap();

        assert!(!outcome.release.has_completed(ReleaseStep::Tag));
        assert!(outcome.release.notes.iter().any(|n| n.contains("reused")));
    }

    #[test]
    fn test_invalid_version_rejected() {
        let (temp, repo) = setup_project();
        let config = config();
        let workflow = ReleaseWorkflow::new(&config, temp.path(), options("next"));

        assert!(workflow.execute(&repo, AcceptDefault, RecordingPublisher::default()).is_err());
        assert_eq!(repo.all_commits().unwrap().len(), 3);
    }

    #[test]
    fn test_wrong_branch_fails_before_any_change() {
        let (temp, repo) = setup_project();
        let _remote = add_origin(temp.path());
        checkout_new_branch(temp.path(), "develop");
        let config = git_only_config();

        let workflow = ReleaseWorkflow::new(&config, temp.path(), options("0.2.0"));
        let err = workflow
            .execute(&repo, AcceptDefault, RecordingPublisher::default())
            .unwrap_err();

        match err {
            TagshipError::Git(GitError::WrongBranch { expected, current }) => {
                assert_eq!(expected, "main");
                assert_eq!(current, "develop");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(repo.find_tag("v0.2.0").unwrap().is_none());
        assert_eq!(repo.all_commits().unwrap().len(), 3);
        assert!(!temp.path().join("CHANGELOG.md").exists());
        let init = std::fs::read_to_string(temp.path().join("numeral/__init__.py")).unwrap();
        assert_eq!(init, "__version__ = '0.1.0'\n");
    }

    #[test]
    fn test_dirty_tree_fails_before_any_change() {
        let (temp, repo) = setup_project();
        std::fs::write(temp.path().join("README.md"), "edited\n").unwrap();
        let config = git_only_config();

        let workflow = ReleaseWorkflow::new(&config, temp.path(), options("0.2.0"));
        let result = workflow.execute(&repo, AcceptDefault, RecordingPublisher::default());

        assert!(matches!(
            result,
            Err(TagshipError::Git(GitError::DirtyWorkingDirectory))
        ));
        assert!(repo.find_tag("v0.2.0").unwrap().is_none());
    }

    #[test]
    fn test_push_to_origin() {
        let (temp, repo) = setup_project();
        let remote = add_origin(temp.path());
        let config = git_only_config();

        let workflow = ReleaseWorkflow::new(&config, temp.path(), options("0.2.0"));
        let outcome = workflow.execute(&repo, AcceptDefault, RecordingPublisher::default()).unwrap();
        assert!(outcome.release.has_completed(ReleaseStep::Push));

        let origin = Repository::open_bare(remote.path()).unwrap();
        let pushed = origin.find_reference("refs/heads/main").unwrap().peel_to_commit().unwrap();
        assert_eq!(pushed.summary(), Some("chore(release): 0.2.0"));
        assert!(origin.find_reference("refs/tags/v0.2.0").is_ok());
    }

    #[test]
    fn test_allow_branch_pushes_current_branch() {
        let (temp, repo) = setup_project();
        let remote = add_origin(temp.path());
        checkout_new_branch(temp.path(), "hotfix");
        let config = git_only_config();

        let mut opts = options("0.1.1");
        opts.allow_branch = true;
        let workflow = ReleaseWorkflow::new(&config, temp.path(), opts);
        workflow.execute(&repo, AcceptDefault, RecordingPublisher::default()).unwrap();

        let origin = Repository::open_bare(remote.path()).unwrap();
        assert!(origin.find_reference("refs/heads/hotfix").is_ok());
        assert!(origin.find_reference("refs/heads/main").is_err());
        assert!(origin.find_reference("refs/tags/v0.1.1").is_ok());
    }

    #[test]
    fn test_push_failure_exits_as_git_error() {
        let (temp, repo) = setup_project();
        let gone = TempDir::new().unwrap();
        Repository::open(temp.path())
            .unwrap()
            .remote("origin", gone.path().join("missing.git").to_str().unwrap())
            .unwrap();
        let config = git_only_config();

        let workflow = ReleaseWorkflow::new(&config, temp.path(), options("0.2.0"));
        let err = workflow
            .execute(&repo, AcceptDefault, RecordingPublisher::default())
            .unwrap_err();

        assert!(matches!(err, TagshipError::Git(GitError::PushFailed(_))));
        assert_eq!(
            crate::exit_codes::for_error(&anyhow::Error::from(err)),
            crate::exit_codes::GIT_ERROR
        );
    }

    #[test]
    fn test_ensure_clean() {
        let (temp, repo) = setup_project();
        let config = config();
        assert!(ensure_clean(&config, &repo).is_ok());

        std::fs::write(temp.path().join("README.md"), "edited\n").unwrap();
        assert!(ensure_clean(&config, &repo).is_err());

        let mut relaxed = config.clone();
        relaxed.git.require_clean = false;
        assert!(ensure_clean(&relaxed, &repo).is_ok());
    }

    #[test]
    fn test_publish_without_profiles() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("dist")).unwrap();
        std::fs::write(temp.path().join("dist").join("numeral-0.2.0.tar.gz"), "").unwrap();
        let publisher = RecordingPublisher::default();

        let summary =
            publish_artifacts(&Config::default(), temp.path(), None, AcceptDefault, &publisher).unwrap();

        assert!(summary.profile.is_none());
        assert_eq!(summary.report.missing_input, 1);
        assert!(publisher.calls.borrow().is_empty());
    }

    #[test]
    fn test_publish_with_unreadable_profile_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("dist")).unwrap();
        std::fs::write(temp.path().join("dist").join("numeral-0.2.0.tar.gz"), "").unwrap();
        std::fs::write(temp.path().join("dist").join("numeral-0.2.0-py3-none-any.whl"), "").unwrap();
        // A regular file where the profile directory should be
        std::fs::write(temp.path().join("credentials"), "").unwrap();

        let mut config = Config::default();
        config.publish.profile_dir = PathBuf::from("credentials");
        let publisher = RecordingPublisher::default();

        let summary =
            publish_artifacts(&config, temp.path(), None, AcceptDefault, &publisher).unwrap();

        assert!(summary.profile.is_none());
        assert_eq!(summary.results.len(), 2);
        for result in &summary.results {
            assert_eq!(
                result.outcome,
                DispatchOutcome::SkippedMissingArtifact(MissingInput::Profile)
            );
        }
        assert!(publisher.calls.borrow().is_empty());
    }

    struct Answer(&'static str);

    impl ProfilePrompt for Answer {
        fn choose(&self, _names: &[&str], _default: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_prompt_answer_naming_unknown_profile() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("dist")).unwrap();
        std::fs::write(temp.path().join("dist").join("numeral-0.2.0.tar.gz"), "").unwrap();
        std::fs::write(temp.path().join("release.pypirc"), "[distutils]\n").unwrap();
        std::fs::write(temp.path().join("test.pypirc"), "[distutils]\n").unwrap();
        let publisher = RecordingPublisher::default();

        let summary =
            publish_artifacts(&Config::default(), temp.path(), None, Answer("staging"), &publisher)
                .unwrap();

        let profile = summary.profile.unwrap();
        assert_eq!(profile.name, "staging");
        assert!(profile.config_path.ends_with("staging.pypirc"));
        assert_eq!(
            summary.results[0].outcome,
            DispatchOutcome::SkippedMissingArtifact(MissingInput::ProfileConfig(
                profile.config_path.clone()
            ))
        );
        assert!(publisher.calls.borrow().is_empty());
    }
}
