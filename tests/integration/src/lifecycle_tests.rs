//! Full branch/commit/cleanup lifecycle exercised through one manager
//! instance, the way a long-lived consumer would drive it.

use repo_manager::{CommittedFiles, Error, ManagerConfig, RepositoryManager};
use repo_test_utils::repo::TestRepo;

#[test]
fn test_feature_branch_workflow() {
    let repo = TestRepo::with_commit();
    let mut manager =
        RepositoryManager::new(ManagerConfig::default().with_project_path(repo.root()));

    assert!(manager.check_git_installation());
    assert!(manager.is_git_repository());

    // Validate, create, and switch to a feature branch.
    let validation = manager.validate_branch_name("user-auth", "feature/");
    assert!(validation.valid);
    let branch = validation.normalized_name;
    assert_eq!(branch, "feature/user-auth");

    let created = manager.create_branch(&branch, true).unwrap();
    assert!(created.checked_out);
    assert_eq!(manager.current_branch().unwrap().branch, branch);

    // Work on the branch and commit everything.
    repo.write_file("src/auth.rs", "pub fn login() {}");
    let status = manager.git_status().unwrap();
    assert!(status.has_changes);

    let commit = manager.commit_changes("Add login", None).unwrap();
    assert_eq!(commit.files, CommittedFiles::AllFiles);
    assert!(!manager.git_status().unwrap().has_changes);

    // The feature now has a commit main lacks, so cleanup must not touch it.
    manager.checkout_branch("main").unwrap();
    let report = manager.cleanup_merged_branches("main", false).unwrap();
    assert!(!report.merged_branches.contains(&branch));

    let list = manager.list_branches().unwrap();
    assert!(list.branches.iter().any(|b| b.name == branch));
    assert_eq!(list.current_branch, "main");
}

#[test]
fn test_cache_stays_consistent_across_mutations() {
    let repo = TestRepo::with_commit();
    let mut manager =
        RepositoryManager::new(ManagerConfig::default().with_project_path(repo.root()));

    // Prime every cacheable read.
    manager.check_git_installation();
    manager.git_status().unwrap();
    manager.current_branch().unwrap();
    manager.remotes().unwrap();

    // Branch creation with checkout drops only the branch key.
    manager.create_branch("dev", true).unwrap();
    assert!(manager.cache().git_branch.is_none());
    assert!(manager.cache().git_status.is_some());
    assert_eq!(manager.current_branch().unwrap().branch, "dev");

    // Commit drops only the status key.
    repo.write_file("file.txt", "contents");
    manager.commit_changes("Add file", None).unwrap();
    assert!(manager.cache().git_status.is_none());
    assert!(manager.cache().git_branch.is_some());

    // Checkout drops branch and (conservatively) status.
    manager.git_status().unwrap();
    manager.checkout_branch("main").unwrap();
    assert!(manager.cache().git_branch.is_none());
    assert!(manager.cache().git_status.is_none());

    // Version and repo-detection survive every mutation.
    assert!(manager.cache().git_version.is_some());
    assert_eq!(manager.cache().is_git_repo, Some(true));
}

#[test]
fn test_branch_guards_compose() {
    let repo = TestRepo::with_commit();
    let mut manager =
        RepositoryManager::new(ManagerConfig::default().with_project_path(repo.root()));

    manager.create_branch("dev", false).unwrap();

    assert!(matches!(
        manager.create_branch("dev", false).unwrap_err(),
        Error::BranchExists { .. }
    ));
    assert!(matches!(
        manager.checkout_branch("missing").unwrap_err(),
        Error::BranchNotFound { .. }
    ));
    assert!(matches!(
        manager.delete_branch("main", true).unwrap_err(),
        Error::CannotDeleteCurrentBranch { .. }
    ));

    // None of the failed guards changed on-disk state.
    assert_eq!(repo.current_branch(), "main");
    let branches = repo.local_branches();
    assert!(branches.contains(&"main".to_string()));
    assert!(branches.contains(&"dev".to_string()));
}
