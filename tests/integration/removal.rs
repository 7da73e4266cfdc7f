//! Prune, confirm and delete against a real remote

use super::helpers::TestRepo;

#[test]
fn test_force_removes_gone_branches() {
    let repo = TestRepo::new();
    repo.push_branch("feature/done", false);
    repo.push_branch("feature/active", false);
    repo.delete_on_remote("feature/done");

    let run = repo.run_ghar(&["--force"], "");

    assert!(run.success(), "stderr: {}", run.stderr());
    let stdout = run.stdout();
    assert!(stdout.contains("The following branches are gone from the remote and can be removed:"));
    assert!(stdout.contains("- feature/done"));
    assert!(!stdout.contains("- feature/active"));
    assert!(!stdout.contains("(y/n)"));
    assert!(stdout.contains("Deleted branch feature/done"));

    assert!(!repo.branch_exists("feature/done"));
    assert!(repo.branch_exists("feature/active"));
    assert!(repo.branch_exists("main"));
}

#[test]
fn test_nothing_to_remove() {
    let repo = TestRepo::new();
    repo.push_branch("feature/active", false);

    let run = repo.run_ghar(&[], "y\n");

    assert!(run.success(), "stderr: {}", run.stderr());
    assert!(run.stdout().contains("No branches to remove."));
    assert!(repo.branch_exists("feature/active"));
}

#[test]
fn test_declined_prompt_keeps_branches() {
    let repo = TestRepo::new();
    repo.push_branch("feature/done", false);
    repo.delete_on_remote("feature/done");

    let run = repo.run_ghar(&[], "n\n");

    assert!(run.success(), "stderr: {}", run.stderr());
    assert!(run.stdout().contains("Do you want to remove these branches? (y/n): "));
    assert!(run.stdout().contains("Aborted."));
    assert!(repo.branch_exists("feature/done"));
}

#[test]
fn test_confirmed_prompt_deletes() {
    let repo = TestRepo::new();
    repo.push_branch("feature/done", false);
    repo.delete_on_remote("feature/done");

    let run = repo.run_ghar(&[], "y\n");

    assert!(run.success(), "stderr: {}", run.stderr());
    assert!(run.stdout().contains("Deleted branch feature/done"));
    assert!(!repo.branch_exists("feature/done"));
}

#[test]
fn test_safe_delete_failure_is_not_fatal() {
    let repo = TestRepo::new();
    repo.push_branch("feature/merged", false);
    repo.push_branch("feature/unmerged", true);
    repo.delete_on_remote("feature/merged");
    repo.delete_on_remote("feature/unmerged");

    let run = repo.run_ghar(&["--force"], "");

    assert!(run.success(), "stderr: {}", run.stderr());
    assert_eq!(
        run.stderr()
            .matches("Failed to delete branch feature/unmerged")
            .count(),
        1
    );
    assert!(run.stdout().contains("Deleted branch feature/merged"));
    assert!(!repo.branch_exists("feature/merged"));
    assert!(repo.branch_exists("feature/unmerged"));
}

#[test]
fn test_merged_flag_forces_deletion() {
    let repo = TestRepo::new();
    repo.push_branch("feature/merged", false);
    repo.push_branch("feature/unmerged", true);
    repo.delete_on_remote("feature/merged");
    repo.delete_on_remote("feature/unmerged");

    let run = repo.run_ghar(&["--force", "-D"], "");

    assert!(run.success(), "stderr: {}", run.stderr());
    assert!(!run.stderr().contains("Failed to delete branch"));
    assert!(!repo.branch_exists("feature/merged"));
    assert!(!repo.branch_exists("feature/unmerged"));
}
