//! Per-instance cache of git query results
//!
//! One field per cached operation. An entry stays valid only until a
//! mutating operation on the owning [`RepositoryManager`] touches the
//! on-disk state it describes; each mutating operation invalidates
//! exactly the keys it affects, and [`OperationCache::clear`] resets
//! everything at once.
//!
//! [`RepositoryManager`]: crate::manager::RepositoryManager

use tracing::trace;

/// Last computed result per cached operation, or `None` when unset.
#[derive(Debug, Default, Clone)]
pub struct OperationCache {
    /// Result of repository detection
    pub is_git_repo: Option<bool>,
    /// Version string reported by `git --version`
    pub git_version: Option<String>,
    /// Raw porcelain status text
    pub git_status: Option<String>,
    /// Name of the checked-out branch
    pub git_branch: Option<String>,
    /// Configured remote names
    pub git_remotes: Option<Vec<String>>,
}

impl OperationCache {
    /// Reset every entry to unset.
    pub fn clear(&mut self) {
        trace!("clearing all cached git results");
        *self = Self::default();
    }

    /// Drop the cached current branch. Called by operations that move HEAD.
    pub fn invalidate_branch(&mut self) {
        trace!("invalidating cached branch");
        self.git_branch = None;
    }

    /// Drop the cached status. Called by operations that touch the working
    /// tree or the index.
    pub fn invalidate_status(&mut self) {
        trace!("invalidating cached status");
        self.git_status = None;
    }

    /// True when no entry is populated.
    pub fn is_empty(&self) -> bool {
        self.is_git_repo.is_none()
            && self.git_version.is_none()
            && self.git_status.is_none()
            && self.git_branch.is_none()
            && self.git_remotes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> OperationCache {
        OperationCache {
            is_git_repo: Some(true),
            git_version: Some("git version 2.47.0".to_string()),
            git_status: Some("M src/lib.rs".to_string()),
            git_branch: Some("main".to_string()),
            git_remotes: Some(vec!["origin".to_string()]),
        }
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut cache = populated();
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.is_git_repo, None);
        assert_eq!(cache.git_version, None);
        assert_eq!(cache.git_status, None);
        assert_eq!(cache.git_branch, None);
        assert_eq!(cache.git_remotes, None);
    }

    #[test]
    fn test_invalidate_branch_leaves_other_keys() {
        let mut cache = populated();
        cache.invalidate_branch();

        assert_eq!(cache.git_branch, None);
        assert_eq!(cache.is_git_repo, Some(true));
        assert!(cache.git_status.is_some());
    }

    #[test]
    fn test_invalidate_status_leaves_other_keys() {
        let mut cache = populated();
        cache.invalidate_status();

        assert_eq!(cache.git_status, None);
        assert!(cache.git_branch.is_some());
    }
}
