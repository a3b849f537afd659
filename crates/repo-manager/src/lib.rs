//! Caching facade over the `git` command-line tool
//!
//! This crate lets calling code query and mutate one working directory's
//! repository state (branch, status, remotes, commits) without repeatedly
//! paying subprocess-spawn cost, and normalizes raw command output into
//! structured results with consistent success/error shapes.
//!
//! # Architecture
//!
//! ```text
//!        RepositoryManager        public operations + cache discipline
//!          |           |
//!   OperationCache  GitCommandExecutor
//!   (per-instance   (blocking `git` subprocess
//!    result cache)   with hard timeout)
//! ```
//!
//! The `git` executable is treated as an opaque subprocess: its exit code
//! and stdout/stderr are the entire contract. This crate performs no
//! history traversal, diffing, or object-database access and links no git
//! library.
//!
//! # Example
//!
//! ```ignore
//! use repo_manager::{ManagerConfig, RepositoryManager};
//!
//! let mut manager = RepositoryManager::new(
//!     ManagerConfig::default().with_project_path("/path/to/repo"),
//! );
//! if manager.is_git_repository() {
//!     let status = manager.git_status()?;
//!     println!("dirty: {}", status.has_changes);
//! }
//! # Ok::<(), repo_manager::Error>(())
//! ```

pub mod cache;
pub mod error;
pub mod executor;
pub mod manager;
pub mod naming;

pub use cache::OperationCache;
pub use error::{Error, Result};
pub use executor::{CommandOutput, GitCommandExecutor};
pub use manager::{
    BranchDescriptor, BranchList, BranchRead, CheckedOutBranch, CleanupReport, Commit,
    CommittedFiles, ComprehensiveInfo, CreatedBranch, DEFAULT_TIMEOUT, DeletedBranch,
    HealthReport, ManagerConfig, Pushed, RemoteRead, RepositoryManager, StatusReport,
};
pub use naming::{BranchNameValidation, MAX_BRANCH_NAME_LEN, validate_branch_name};
