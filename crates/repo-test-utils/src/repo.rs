//! [`TestRepo`] builder for repository-manager test scenarios.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::git;

/// A temporary directory with helper methods for git-backed test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use repo_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::with_commit();
/// repo.create_branch("feature/auth");
/// repo.write_file("src/main.rs", "fn main() {}");
/// repo.assert_file_exists("src/main.rs");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory (no git state at all).
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a temporary directory initialised as an empty git repository
    /// (identity configured, no commits).
    pub fn empty_repo() -> Self {
        let repo = Self::new();
        git::init_repo(repo.root());
        repo
    }

    /// Create a temporary directory initialised on branch `main` with one
    /// commit in history.
    pub fn with_commit() -> Self {
        let repo = Self::new();
        git::repo_with_commit(repo.root());
        repo
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `path` (relative to the root), creating parent
    /// directories as needed.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", full_path.display()));
    }

    /// Create a local branch at HEAD without checking it out.
    pub fn create_branch(&self, name: &str) {
        git::git(self.root(), &["branch", name]);
    }

    /// Check out an existing branch.
    pub fn checkout(&self, name: &str) {
        git::git(self.root(), &["checkout", name]);
    }

    /// Stage everything and commit with `message`.
    pub fn commit_all(&self, message: &str) {
        git::git(self.root(), &["add", "-A"]);
        git::git(self.root(), &["commit", "-m", message]);
    }

    /// The branch HEAD currently points at.
    pub fn current_branch(&self) -> String {
        git::git_stdout(self.root(), &["symbolic-ref", "--short", "HEAD"])
    }

    /// Local branch names, sorted by git's default ref order.
    pub fn local_branches(&self) -> Vec<String> {
        git::git_stdout(
            self.root(),
            &["for-each-ref", "--format=%(refname:short)", "refs/heads/"],
        )
        .lines()
        .map(String::from)
        .collect()
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
