//! Error types for repo-manager

use std::path::PathBuf;
use std::time::Duration;

/// Result type for repo-manager operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in repository-manager operations.
///
/// Every expected failure condition has its own variant so callers can
/// match on the condition instead of parsing message strings. Tool
/// failures that fit no other variant land in [`Error::ToolInvocationFailed`]
/// with git's own (trimmed) diagnostic as the message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Target directory is not inside a git working tree
    #[error("Not a git repository")]
    NotARepository {
        /// The directory that was probed
        path: PathBuf,
    },

    /// Branch creation was asked for a name that already exists
    #[error("Branch '{name}' already exists")]
    BranchExists { name: String },

    /// Requested branch does not exist
    #[error("Branch '{name}' not found")]
    BranchNotFound { name: String },

    /// Deletion was asked for the branch the working tree is on
    #[error("Cannot delete the currently checked out branch '{name}'")]
    CannotDeleteCurrentBranch { name: String },

    /// Branch name failed validation; `errors` holds every rule it broke
    #[error("Invalid branch name '{name}': {}", .errors.join("; "))]
    InvalidBranchName { name: String, errors: Vec<String> },

    /// Subprocess exceeded the configured timeout and was killed
    #[error("`git {command}` timed out after {timeout:?}")]
    OperationTimedOut { command: String, timeout: Duration },

    /// Subprocess exited non-zero; message is trimmed stderr (or stdout)
    #[error("`git {command}` failed: {message}")]
    ToolInvocationFailed { command: String, message: String },

    /// Failed to spawn or talk to the subprocess
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
