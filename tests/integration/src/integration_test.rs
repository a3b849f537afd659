//! End-to-end integration test for the manager's aggregate queries.
//!
//! Exercises the full flow: construction -> detection -> health and
//! comprehensive info, including JSON shapes consumers rely on.

use repo_manager::{ManagerConfig, RepositoryManager};
use repo_test_utils::repo::TestRepo;
use tempfile::TempDir;

#[tokio::test]
async fn test_comprehensive_info_on_repository() {
    let repo = TestRepo::with_commit();
    repo.write_file("dirty.txt", "uncommitted");
    let mut manager =
        RepositoryManager::new(ManagerConfig::default().with_project_path(repo.root()));

    let info = manager.comprehensive_info().await;

    assert!(info.is_git_repository);
    assert!(info.healthy);
    assert!(info.git_version.unwrap().starts_with("git version"));
    assert_eq!(info.current_branch.as_deref(), Some("main"));
    assert_eq!(info.has_changes, Some(true));
    assert!(info.status.unwrap().contains("dirty.txt"));
    assert_eq!(info.remotes, Some(vec![]));
    assert_eq!(info.error, None);
}

#[tokio::test]
async fn test_comprehensive_info_outside_repository_omits_fields() {
    let temp = TempDir::new().unwrap();
    let mut manager =
        RepositoryManager::new(ManagerConfig::default().with_project_path(temp.path()));

    let info = manager.comprehensive_info().await;

    assert!(!info.is_git_repository);
    assert!(!info.healthy);
    assert_eq!(info.error.as_deref(), Some("Not a git repository"));
    assert_eq!(info.git_version, None);
    assert_eq!(info.current_branch, None);
    assert_eq!(info.status, None);
    assert_eq!(info.has_changes, None);
    assert_eq!(info.remotes, None);

    // Repository-dependent fields are omitted from the JSON, not defaulted.
    let json = serde_json::to_value(&info).unwrap();
    let object = json.as_object().unwrap();
    assert!(object.contains_key("timestamp"));
    assert!(object.contains_key("is_git_repository"));
    assert!(object.contains_key("healthy"));
    assert!(object.contains_key("error"));
    assert!(!object.contains_key("git_version"));
    assert!(!object.contains_key("current_branch"));
    assert!(!object.contains_key("status"));
    assert!(!object.contains_key("remotes"));
}

#[tokio::test]
async fn test_comprehensive_info_populates_cache_for_later_reads() {
    let repo = TestRepo::with_commit();
    let mut manager =
        RepositoryManager::new(ManagerConfig::default().with_project_path(repo.root()));

    manager.comprehensive_info().await;

    // Every sub-query result is now cached; subsequent reads hit the cache.
    assert!(manager.git_status().unwrap().cached);
    assert!(manager.current_branch().unwrap().cached);
    assert!(manager.remotes().unwrap().cached);
}

#[test]
fn test_health_report_round_trips_through_json() {
    let repo = TestRepo::with_commit();
    let mut manager =
        RepositoryManager::new(ManagerConfig::default().with_project_path(repo.root()));

    let health = manager.repository_health();
    let json = serde_json::to_string(&health).unwrap();
    let parsed: repo_manager::HealthReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, health);
}
