//! Repository manager: cached queries and lifecycle operations over git
//!
//! [`RepositoryManager`] owns a target directory, a per-invocation timeout,
//! and an [`OperationCache`]. Every repository-dependent operation first
//! gates on detection (cached), then either serves a cached read or invokes
//! git through the executor, normalizes the output, updates the cache, and
//! returns a structured payload. Mutating operations invalidate exactly the
//! cache keys they affect.
//!
//! Expected failures (not a repository, branch exists, branch not found,
//! ...) are `Err` values of [`Error`](crate::Error) — nothing here panics
//! on them.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::OperationCache;
use crate::error::{Error, Result};
use crate::executor::GitCommandExecutor;
use crate::naming::{self, BranchNameValidation};

/// Default per-invocation subprocess timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Message used wherever the not-a-repository condition is surfaced as text.
const NOT_A_REPOSITORY: &str = "Not a git repository";

/// Configuration for a [`RepositoryManager`].
///
/// Only the target directory and the subprocess timeout are recognized.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Directory the manager operates on. Defaults to the process working
    /// directory.
    pub project_path: PathBuf,
    /// Hard timeout for each git invocation. Defaults to 30 seconds.
    pub timeout: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            project_path: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ManagerConfig {
    /// Set the target directory.
    pub fn with_project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = path.into();
        self
    }

    /// Set the per-invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Working-tree status as reported by `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Raw porcelain output, trimmed
    pub status: String,
    /// True when the output is non-empty (uncommitted changes exist)
    pub has_changes: bool,
    /// True when served from the cache instead of a fresh invocation
    pub cached: bool,
}

/// Currently checked-out branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRead {
    pub branch: String,
    /// True when served from the cache instead of a fresh invocation
    pub cached: bool,
}

/// Configured remote names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRead {
    pub remotes: Vec<String>,
    /// True when served from the cache instead of a fresh invocation
    pub cached: bool,
}

/// One entry of the local+remote branch listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDescriptor {
    pub name: String,
    /// True iff this is the checked-out branch
    pub current: bool,
    /// True iff this is a tracking/remote-only reference
    pub remote: bool,
}

/// Full branch listing plus the live current branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchList {
    pub branches: Vec<BranchDescriptor>,
    pub current_branch: String,
}

/// Outcome of [`RepositoryManager::create_branch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBranch {
    pub branch_name: String,
    /// True when the working tree was also switched to the new branch
    pub checked_out: bool,
}

/// Outcome of [`RepositoryManager::checkout_branch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedOutBranch {
    pub branch_name: String,
}

/// Outcome of [`RepositoryManager::delete_branch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedBranch {
    pub branch_name: String,
    /// Whether force deletion was requested
    pub force: bool,
}

/// What a commit staged: everything, or an explicit path list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommittedFiles {
    /// Everything was staged via `git add -A`
    AllFiles,
    /// The explicit paths passed to `commit_changes`
    Paths(Vec<String>),
}

impl fmt::Display for CommittedFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommittedFiles::AllFiles => f.write_str("all files"),
            CommittedFiles::Paths(paths) => f.write_str(&paths.join(", ")),
        }
    }
}

/// Outcome of [`RepositoryManager::commit_changes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub message: String,
    /// Echo of what was staged
    pub files: CommittedFiles,
}

/// Outcome of [`RepositoryManager::push_changes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pushed {
    /// Trimmed summary the remote/tool printed (git reports push progress
    /// on stderr even on success)
    pub remote_output: String,
}

/// Outcome of [`RepositoryManager::cleanup_merged_branches`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReport {
    /// Local branches fully merged into the target (target and current
    /// branch excluded)
    pub merged_branches: Vec<String>,
    /// Branches actually deleted; always empty on a dry run
    pub deleted_branches: Vec<String>,
    pub dry_run: bool,
}

/// Aggregate health of the target repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// True iff this is a repository and no sub-query failed
    pub healthy: bool,
    pub is_git_repository: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_uncommitted_changes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_remote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Superset of [`HealthReport`] with a timestamp and the raw payloads.
///
/// For a non-repository target the repository-dependent fields stay `None`
/// (and are skipped during serialization) rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensiveInfo {
    pub timestamp: DateTime<Utc>,
    pub is_git_repository: bool,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_changes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remotes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Caching facade over the git CLI for one working directory.
///
/// One instance per target directory; the cache is the only mutable state
/// and lives exactly as long as the instance. Operations execute strictly
/// sequentially (methods take `&mut self`), so no internal locking exists;
/// cross-instance safety is governed by git's own index/ref locks.
#[derive(Debug)]
pub struct RepositoryManager {
    project_path: PathBuf,
    executor: GitCommandExecutor,
    cache: OperationCache,
}

impl RepositoryManager {
    /// Create a manager from configuration. The project path is
    /// canonicalized when it exists; a nonexistent path is kept verbatim
    /// and detection will simply report not-a-repository.
    pub fn new(config: ManagerConfig) -> Self {
        let project_path =
            dunce::canonicalize(&config.project_path).unwrap_or(config.project_path);
        let executor = GitCommandExecutor::new(&project_path, config.timeout);
        Self {
            project_path,
            executor,
            cache: OperationCache::default(),
        }
    }

    /// Create a manager for the process working directory with defaults.
    pub fn with_defaults() -> Self {
        Self::new(ManagerConfig::default())
    }

    /// The directory this manager operates on.
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Read-only view of the cache, for callers (and tests) that need to
    /// observe population and invalidation directly.
    pub fn cache(&self) -> &OperationCache {
        &self.cache
    }

    /// Check that the git tool is available, caching its version string.
    ///
    /// Returns false without raising when the tool is absent or errors.
    /// Idempotent: a second call serves the cached version without
    /// spawning a process.
    pub fn check_git_installation(&mut self) -> bool {
        if self.cache.git_version.is_some() {
            return true;
        }
        match self.executor.run(&["--version"]) {
            Ok(version) => {
                debug!(%version, "git installation detected");
                self.cache.git_version = Some(version);
                true
            }
            Err(err) => {
                warn!(error = %err, "git installation not found");
                false
            }
        }
    }

    /// The cached version string, populated by [`check_git_installation`]
    /// (or any aggregate query that ran it).
    ///
    /// [`check_git_installation`]: RepositoryManager::check_git_installation
    pub fn git_version(&self) -> Option<&str> {
        self.cache.git_version.as_deref()
    }

    /// Whether the target directory is inside a git working tree. Cached;
    /// the precondition gate for every repository-dependent operation.
    pub fn is_git_repository(&mut self) -> bool {
        if let Some(cached) = self.cache.is_git_repo {
            return cached;
        }
        let is_repo = matches!(
            self.executor
                .run(&["rev-parse", "--is-inside-work-tree"])
                .as_deref(),
            Ok("true")
        );
        debug!(path = %self.project_path.display(), is_repo, "repository detection");
        self.cache.is_git_repo = Some(is_repo);
        is_repo
    }

    fn require_repository(&mut self) -> Result<()> {
        if self.is_git_repository() {
            Ok(())
        } else {
            Err(Error::NotARepository {
                path: self.project_path.clone(),
            })
        }
    }

    /// Porcelain working-tree status. Cached until a mutating operation
    /// invalidates it.
    pub fn git_status(&mut self) -> Result<StatusReport> {
        self.require_repository()?;
        if let Some(status) = &self.cache.git_status {
            return Ok(StatusReport {
                has_changes: !status.is_empty(),
                status: status.clone(),
                cached: true,
            });
        }
        let status = self.executor.run(&["status", "--porcelain"])?;
        self.cache.git_status = Some(status.clone());
        Ok(StatusReport {
            has_changes: !status.is_empty(),
            status,
            cached: false,
        })
    }

    /// Name of the checked-out branch via the symbolic ref. Cached;
    /// checkouts performed through this manager invalidate the entry
    /// before returning, so the next read reflects them.
    pub fn current_branch(&mut self) -> Result<BranchRead> {
        self.require_repository()?;
        if let Some(branch) = &self.cache.git_branch {
            return Ok(BranchRead {
                branch: branch.clone(),
                cached: true,
            });
        }
        let branch = self.executor.run(&["symbolic-ref", "--short", "HEAD"])?;
        self.cache.git_branch = Some(branch.clone());
        Ok(BranchRead {
            branch,
            cached: false,
        })
    }

    /// Configured remote names. Cached.
    pub fn remotes(&mut self) -> Result<RemoteRead> {
        self.require_repository()?;
        if let Some(remotes) = &self.cache.git_remotes {
            return Ok(RemoteRead {
                remotes: remotes.clone(),
                cached: true,
            });
        }
        let output = self.executor.run(&["remote"])?;
        let remotes: Vec<String> = output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        self.cache.git_remotes = Some(remotes.clone());
        Ok(RemoteRead {
            remotes,
            cached: false,
        })
    }

    /// Compose detection, installation, branch, status, and remote queries
    /// into one report. A non-repository target short-circuits without
    /// running the remaining sub-queries.
    pub fn repository_health(&mut self) -> HealthReport {
        if !self.is_git_repository() {
            return HealthReport {
                healthy: false,
                is_git_repository: false,
                git_version: None,
                current_branch: None,
                has_uncommitted_changes: None,
                has_remote: None,
                error: Some(NOT_A_REPOSITORY.to_string()),
            };
        }

        let git_installed = self.check_git_installation();
        let branch = self.current_branch();
        let status = self.git_status();
        let remotes = self.remotes();

        let error = [
            branch.as_ref().err().map(ToString::to_string),
            status.as_ref().err().map(ToString::to_string),
            remotes.as_ref().err().map(ToString::to_string),
        ]
        .into_iter()
        .flatten()
        .next();

        HealthReport {
            healthy: git_installed && error.is_none(),
            is_git_repository: true,
            git_version: self.cache.git_version.clone(),
            current_branch: branch.ok().map(|b| b.branch),
            has_uncommitted_changes: status.ok().map(|s| s.has_changes),
            has_remote: remotes.ok().map(|r| !r.remotes.is_empty()),
            error,
        }
    }

    /// Superset of [`repository_health`] with a timestamp and the raw
    /// status/remote payloads. Async in signature only: it composes the
    /// synchronous sub-calls and introduces no additional concurrency.
    ///
    /// [`repository_health`]: RepositoryManager::repository_health
    pub async fn comprehensive_info(&mut self) -> ComprehensiveInfo {
        let timestamp = Utc::now();

        if !self.is_git_repository() {
            return ComprehensiveInfo {
                timestamp,
                is_git_repository: false,
                healthy: false,
                git_version: None,
                current_branch: None,
                status: None,
                has_changes: None,
                remotes: None,
                error: Some(NOT_A_REPOSITORY.to_string()),
            };
        }

        let git_installed = self.check_git_installation();
        let branch = self.current_branch();
        let status = self.git_status();
        let remotes = self.remotes();

        let error = [
            branch.as_ref().err().map(ToString::to_string),
            status.as_ref().err().map(ToString::to_string),
            remotes.as_ref().err().map(ToString::to_string),
        ]
        .into_iter()
        .flatten()
        .next();

        let status = status.ok();
        ComprehensiveInfo {
            timestamp,
            is_git_repository: true,
            healthy: git_installed && error.is_none(),
            git_version: self.cache.git_version.clone(),
            current_branch: branch.ok().map(|b| b.branch),
            has_changes: status.as_ref().map(|s| s.has_changes),
            status: status.map(|s| s.status),
            remotes: remotes.ok().map(|r| r.remotes),
            error,
        }
    }

    fn branch_exists(&self, name: &str) -> bool {
        self.executor
            .run(&[
                "rev-parse",
                "--verify",
                "--quiet",
                &format!("refs/heads/{name}"),
            ])
            .is_ok()
    }

    /// Create a branch, optionally checking it out.
    ///
    /// Fails with [`Error::InvalidBranchName`] before touching the
    /// repository, and with [`Error::BranchExists`] when the ref already
    /// exists. A checkout invalidates the cached branch.
    pub fn create_branch(&mut self, name: &str, checkout: bool) -> Result<CreatedBranch> {
        self.require_repository()?;

        let validation = naming::validate_branch_name(name, "");
        if !validation.valid {
            return Err(Error::InvalidBranchName {
                name: name.to_string(),
                errors: validation.errors,
            });
        }
        if self.branch_exists(name) {
            return Err(Error::BranchExists {
                name: name.to_string(),
            });
        }

        // "--" separates branch names from git flags
        self.executor.run(&["branch", "--", name])?;
        if checkout {
            self.executor.run(&["checkout", name])?;
            self.cache.invalidate_branch();
        }
        debug!(branch = %name, checkout, "created branch");
        Ok(CreatedBranch {
            branch_name: name.to_string(),
            checked_out: checkout,
        })
    }

    /// Switch the working tree to an existing branch.
    ///
    /// Invalidates the cached branch and, conservatively, the cached
    /// status: uncommitted-change visibility can differ across a checkout
    /// boundary in the general case, even though a clean switch would not
    /// change it.
    pub fn checkout_branch(&mut self, name: &str) -> Result<CheckedOutBranch> {
        self.require_repository()?;
        if !self.branch_exists(name) {
            return Err(Error::BranchNotFound {
                name: name.to_string(),
            });
        }

        self.executor.run(&["checkout", name])?;
        self.cache.invalidate_branch();
        self.cache.invalidate_status();
        debug!(branch = %name, "checked out branch");
        Ok(CheckedOutBranch {
            branch_name: name.to_string(),
        })
    }

    /// Delete a branch (`-D` when `force`). Refuses the currently
    /// checked-out branch regardless of `force`.
    pub fn delete_branch(&mut self, name: &str, force: bool) -> Result<DeletedBranch> {
        self.require_repository()?;

        let current = self.current_branch()?.branch;
        if current == name {
            return Err(Error::CannotDeleteCurrentBranch {
                name: name.to_string(),
            });
        }
        if !self.branch_exists(name) {
            return Err(Error::BranchNotFound {
                name: name.to_string(),
            });
        }

        let flag = if force { "-D" } else { "-d" };
        self.executor.run(&["branch", flag, "--", name])?;
        debug!(branch = %name, force, "deleted branch");
        Ok(DeletedBranch {
            branch_name: name.to_string(),
            force,
        })
    }

    /// Parse the full local+remote branch listing. Exactly one descriptor
    /// is marked current, matching the live current-branch query. Never
    /// cached.
    pub fn list_branches(&mut self) -> Result<BranchList> {
        self.require_repository()?;
        let output = self.executor.run(&["branch", "-a", "--no-color"])?;
        Ok(parse_branch_listing(&output))
    }

    /// Validate a branch name, optionally applying a prefix. Pure: no
    /// subprocess, no caching.
    pub fn validate_branch_name(&self, name: &str, prefix: &str) -> BranchNameValidation {
        naming::validate_branch_name(name, prefix)
    }

    /// Stage and commit changes.
    ///
    /// With `files`, stages exactly those paths; otherwise stages
    /// everything (`git add -A`). Nothing-to-commit surfaces as git's own
    /// non-zero exit, i.e. [`Error::ToolInvocationFailed`]. Invalidates
    /// the cached status on success.
    pub fn commit_changes(&mut self, message: &str, files: Option<&[&str]>) -> Result<Commit> {
        self.require_repository()?;

        match files {
            Some(paths) if !paths.is_empty() => {
                let mut args = vec!["add", "--"];
                args.extend_from_slice(paths);
                self.executor.run(&args)?;
            }
            _ => {
                self.executor.run(&["add", "-A"])?;
            }
        }
        self.executor.run(&["commit", "-m", message])?;
        self.cache.invalidate_status();

        let files = match files {
            Some(paths) if !paths.is_empty() => {
                CommittedFiles::Paths(paths.iter().map(|s| s.to_string()).collect())
            }
            _ => CommittedFiles::AllFiles,
        };
        debug!(%message, files = %files, "committed changes");
        Ok(Commit {
            message: message.to_string(),
            files,
        })
    }

    /// Push the current branch to its remote. Failure carries git's
    /// trimmed diagnostic.
    pub fn push_changes(&mut self) -> Result<Pushed> {
        self.require_repository()?;
        let output = self.executor.output(&["push"])?;
        debug!(summary = %output.summary(), "pushed changes");
        Ok(Pushed {
            remote_output: output.summary().to_string(),
        })
    }

    /// Delete local branches already fully merged into `target`, excluding
    /// `target` itself and the currently checked-out branch.
    ///
    /// With `dry_run` the merged set is reported and nothing is mutated.
    /// Deletion always uses plain `-d`: an unmerged branch is never
    /// touched, and a branch that fails to delete is logged and skipped.
    pub fn cleanup_merged_branches(&mut self, target: &str, dry_run: bool) -> Result<CleanupReport> {
        self.require_repository()?;

        let current = self.current_branch()?.branch;
        let output = self
            .executor
            .run(&["branch", "--merged", target, "--no-color"])?;
        let merged_branches = parse_merged_listing(&output, target, &current);

        if dry_run {
            debug!(target = %target, count = merged_branches.len(), "dry-run cleanup");
            return Ok(CleanupReport {
                merged_branches,
                deleted_branches: Vec::new(),
                dry_run: true,
            });
        }

        let mut deleted_branches = Vec::new();
        for branch in &merged_branches {
            match self.executor.run(&["branch", "-d", "--", branch]) {
                Ok(_) => deleted_branches.push(branch.clone()),
                Err(err) => {
                    warn!(branch = %branch, error = %err, "failed to delete merged branch");
                }
            }
        }
        debug!(target = %target, deleted = deleted_branches.len(), "cleaned up merged branches");
        Ok(CleanupReport {
            merged_branches,
            deleted_branches,
            dry_run: false,
        })
    }

    /// Reset every cache key to unset, forcing the next read of each
    /// operation to re-query live state.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Parse `git branch -a` output into descriptors plus the current branch.
///
/// Symbolic-ref lines (`origin/HEAD -> origin/main`) and detached-HEAD
/// placeholders are skipped; `remotes/` prefixes are stripped and flagged.
fn parse_branch_listing(output: &str) -> BranchList {
    let mut branches = Vec::new();
    let mut current_branch = String::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() || line.contains("->") {
            continue;
        }
        let current = line.starts_with('*');
        let name = line.trim_start_matches('*').trim();
        if name.starts_with('(') {
            // "(HEAD detached at <oid>)"
            continue;
        }
        let remote = name.starts_with("remotes/");
        let name = name.strip_prefix("remotes/").unwrap_or(name);
        if current {
            current_branch = name.to_string();
        }
        branches.push(BranchDescriptor {
            name: name.to_string(),
            current,
            remote,
        });
    }

    BranchList {
        branches,
        current_branch,
    }
}

/// Parse `git branch --merged <target>` output, dropping the target and
/// the current branch.
fn parse_merged_listing(output: &str, target: &str, current: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim_start_matches('*').trim())
        .filter(|name| {
            !name.is_empty() && !name.starts_with('(') && *name != target && *name != current
        })
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_branch_listing_marks_current_and_remote() {
        let output = "\
  dev
* main
  remotes/origin/HEAD -> origin/main
  remotes/origin/main";

        let list = parse_branch_listing(output);
        assert_eq!(list.current_branch, "main");
        assert_eq!(
            list.branches,
            vec![
                BranchDescriptor {
                    name: "dev".to_string(),
                    current: false,
                    remote: false,
                },
                BranchDescriptor {
                    name: "main".to_string(),
                    current: true,
                    remote: false,
                },
                BranchDescriptor {
                    name: "origin/main".to_string(),
                    current: false,
                    remote: true,
                },
            ]
        );
        assert_eq!(list.branches.iter().filter(|b| b.current).count(), 1);
    }

    #[test]
    fn test_parse_branch_listing_skips_detached_head() {
        let output = "* (HEAD detached at 1a2b3c4)\n  main";
        let list = parse_branch_listing(output);
        assert_eq!(list.current_branch, "");
        assert_eq!(list.branches.len(), 1);
        assert_eq!(list.branches[0].name, "main");
    }

    #[test]
    fn test_parse_merged_listing_excludes_target_and_current() {
        let output = "  feature/a\n* work\n  main\n  feature/b";
        let merged = parse_merged_listing(output, "main", "work");
        assert_eq!(merged, vec!["feature/a".to_string(), "feature/b".to_string()]);
    }

    #[test]
    fn test_committed_files_display() {
        assert_eq!(CommittedFiles::AllFiles.to_string(), "all files");
        assert_eq!(
            CommittedFiles::Paths(vec!["a.txt".to_string(), "b.txt".to_string()]).to_string(),
            "a.txt, b.txt"
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = ManagerConfig::default();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(!config.project_path.as_os_str().is_empty());
    }

    #[test]
    fn test_health_report_serialization_skips_unset_fields() {
        let report = HealthReport {
            healthy: false,
            is_git_repository: false,
            git_version: None,
            current_branch: None,
            has_uncommitted_changes: None,
            has_remote: None,
            error: Some(NOT_A_REPOSITORY.to_string()),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "healthy": false,
                "is_git_repository": false,
                "error": "Not a git repository",
            })
        );
    }
}
