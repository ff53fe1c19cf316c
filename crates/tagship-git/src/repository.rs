//! Repository handle and work-tree helpers

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use tracing::{debug, info, instrument};

use tagship_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// A non-bare repository that releases are cut from
pub struct GitRepo {
    pub(crate) repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Open the repository whose work tree is `path`
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::RepositoryNotFound(path.to_path_buf()),
            _ => GitError::OpenFailed(e.to_string()),
        })?;
        Self::from_repository(repo, path)
    }

    /// Open the repository containing `start_path`
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        let repo = Repository::discover(start_path).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::NotARepository(start_path.to_path_buf()),
            _ => GitError::OpenFailed(e.to_string()),
        })?;
        Self::from_repository(repo, start_path)
    }

    fn from_repository(repo: Repository, requested: &Path) -> Result<Self> {
        let workdir = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitError::OpenFailed(format!("{} is a bare repository", requested.display())))?;

        info!(workdir = %workdir.display(), "opened git repository");
        Ok(Self { repo, workdir })
    }

    /// The work tree root
    pub fn path(&self) -> &Path {
        &self.workdir
    }

    /// The commit HEAD points to
    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        Ok(self.repo.head()?.peel_to_commit()?)
    }

    /// The branch a release from this checkout is pushed to.
    ///
    /// HEAD must be on `expected` unless `allow_other` is set, in which case
    /// whatever branch is checked out is used. A detached or unborn HEAD is
    /// never a release branch.
    pub fn release_branch(&self, expected: &str, allow_other: bool) -> Result<String> {
        match self.current_branch()? {
            Some(branch) if allow_other || branch == expected => {
                debug!(branch = %branch, "release branch");
                Ok(branch)
            }
            current => Err(GitError::WrongBranch {
                expected: expected.to_string(),
                current: current.unwrap_or_else(|| "detached HEAD".to_string()),
            }),
        }
    }

    /// `path` relative to the work tree root, as the index expects.
    ///
    /// Relative paths are taken as already work-tree relative.
    pub(crate) fn workdir_relative(&self, path: &Path) -> Result<PathBuf> {
        if path.is_relative() {
            return Ok(path.to_path_buf());
        }

        let outside = || GitError::PathOutsideRepository(path.to_path_buf());
        if let Ok(relative) = path.strip_prefix(&self.workdir) {
            return Ok(relative.to_path_buf());
        }

        // Symlinked temp dirs (macOS /var -> /private/var) need canonical forms
        let workdir = self.workdir.canonicalize().map_err(|_| outside())?;
        let path = path.canonicalize().map_err(|_| outside())?;
        path.strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| outside())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{RepositoryInitOptions, Signature};
    use tempfile::TempDir;

    fn init_on(branch: &str) -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init_opts(temp.path(), RepositoryInitOptions::new().initial_head(branch))
            .unwrap();

        std::fs::write(temp.path().join("setup.py"), "").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("setup.py")).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();

        let repo = GitRepo::open(temp.path()).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _) = init_on("main");
        let subdir = temp.path().join("numeral").join("tests");
        std::fs::create_dir_all(&subdir).unwrap();

        let repo = GitRepo::discover(&subdir).unwrap();
        assert_eq!(
            repo.path().canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_open_outside_repository() {
        let temp = TempDir::new().unwrap();
        assert!(GitRepo::open(temp.path()).is_err());
    }

    #[test]
    fn test_bare_repository_rejected() {
        let temp = TempDir::new().unwrap();
        Repository::init_bare(temp.path()).unwrap();
        assert!(matches!(GitRepo::open(temp.path()), Err(GitError::OpenFailed(_))));
    }

    #[test]
    fn test_head_commit_on_empty_repo() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();
        assert!(repo.head_commit().is_err());
    }

    #[test]
    fn test_release_branch() {
        let (_temp, repo) = init_on("main");
        assert_eq!(repo.release_branch("main", false).unwrap(), "main");
        assert_eq!(repo.release_branch("release", true).unwrap(), "main");

        match repo.release_branch("release", false) {
            Err(GitError::WrongBranch { expected, current }) => {
                assert_eq!(expected, "release");
                assert_eq!(current, "main");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_detached_head_is_not_a_release_branch() {
        let (_temp, repo) = init_on("main");
        let head = repo.head_commit().unwrap().id();
        repo.repo.set_head_detached(head).unwrap();

        assert!(matches!(
            repo.release_branch("main", true),
            Err(GitError::WrongBranch { .. })
        ));
    }

    #[test]
    fn test_workdir_relative() {
        let (temp, repo) = init_on("main");
        std::fs::create_dir(temp.path().join("numeral")).unwrap();
        let inside = temp.path().join("numeral").join("__init__.py");
        std::fs::write(&inside, "").unwrap();
        assert_eq!(
            repo.workdir_relative(&inside).unwrap(),
            PathBuf::from("numeral/__init__.py")
        );
        assert_eq!(
            repo.workdir_relative(Path::new("CHANGELOG.md")).unwrap(),
            PathBuf::from("CHANGELOG.md")
        );

        let elsewhere = TempDir::new().unwrap();
        assert!(matches!(
            repo.workdir_relative(&elsewhere.path().join("x.py")),
            Err(GitError::PathOutsideRepository(_))
        ));
    }
}
