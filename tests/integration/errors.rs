//! Fatal errors and exit codes

use super::helpers::{git, run_ghar_with_env, TestRepo};
use tempfile::TempDir;

#[test]
fn test_outside_repository_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir = temp_dir.path().canonicalize().expect("Failed to canonicalize");
    let ceiling = dir
        .parent()
        .expect("temp dir has a parent")
        .to_string_lossy()
        .to_string();

    let run = run_ghar_with_env(
        &dir,
        &["--force"],
        "",
        &[("GIT_CEILING_DIRECTORIES", ceiling.as_str())],
    );

    assert!(!run.success());
    assert!(run.stderr().contains("Error: not a git repository"));
}

#[test]
fn test_prune_failure_is_fatal() {
    let repo = TestRepo::new();
    repo.push_branch("feature/done", false);
    repo.delete_on_remote("feature/done");

    let missing = repo.remote.with_file_name("missing.git");
    git(
        &["remote", "set-url", "origin", &missing.to_string_lossy()],
        &repo.work,
    );

    let run = repo.run_ghar(&["--force"], "");

    assert!(!run.success());
    assert!(run.stderr().contains("Error pruning remote branches"));
    assert!(!run.stderr().contains("Error: Error"));
    assert!(repo.branch_exists("feature/done"));
}
