// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the cz binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BODY: &str = "Adds a --dry-run flag that prints actions without executing them.";

/// A scratch directory holding a config file so the home directory's
/// configuration never leaks into a test.
fn workspace(config: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("test-cz.toml");
    std::fs::write(&config_path, config).unwrap();
    (dir, config_path)
}

fn cz(dir: &Path, config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cz").unwrap();
    cmd.current_dir(dir)
        .arg("--no-color")
        .arg("--config")
        .arg(config);
    cmd
}

fn init_repo(dir: &Path) -> git2::Repository {
    let repo = git2::Repository::init(dir).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }
    repo
}

fn stage(repo: &git2::Repository, name: &str) {
    let workdir = repo.workdir().unwrap().to_path_buf();
    std::fs::write(workdir.join(name), "content").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
}

#[test]
fn test_version() {
    Command::cargo_bin("cz")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "cz {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_dry_run_prints_message() {
    let (dir, config) = workspace("");

    cz(dir.path(), &config)
        .args(["--dry-run", "--non-interactive", "commit"])
        .args(["-t", "feat", "-s", "cli", "-m", "Add dry-run flag.", "-b", BODY])
        .args(["-f", "closes #42", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Line 1 will be cropped at 100 characters.",
        ))
        .stdout(predicate::str::contains(format!(
            "feat(cli): add dry-run flag\n\n{}\n\ncloses #42",
            BODY
        )))
        .stdout(predicate::str::contains("[dry-run] Would create commit:"))
        .stdout(predicate::str::contains("Commit has been created."));
}

#[test]
fn test_configured_width_crops_head() {
    let (dir, config) = workspace("[format]\nmax_line_width = 20\n");

    cz(dir.path(), &config)
        .args(["--dry-run", "--non-interactive", "commit"])
        .args(["-t", "refactor", "-s", "parser", "-m", "split tokenizer", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cropped at 20 characters"))
        .stdout(predicate::str::contains("refactor(parser): sp\n"))
        .stdout(predicate::str::contains("refactor(parser): spl").not());
}

#[test]
fn test_non_interactive_requires_confirmation() {
    let (dir, config) = workspace("");

    cz(dir.path(), &config)
        .args(["--dry-run", "--non-interactive", "commit", "-t", "fix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmCommit"))
        .stdout(predicate::str::contains("Commit has been created.").not());
}

#[test]
fn test_invalid_type_rejected() {
    let (dir, config) = workspace("");

    cz(dir.path(), &config)
        .args(["--dry-run", "--non-interactive", "commit", "-t", "wip", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value 'wip' for 'type'"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();

    cz(dir.path(), &dir.path().join("absent.toml"))
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_commit_outside_repository() {
    let (dir, config) = workspace("");

    cz(dir.path(), &config)
        .args(["--non-interactive", "commit", "-t", "feat", "-m", "x", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn test_commit_without_staged_changes() {
    let (dir, config) = workspace("");
    init_repo(dir.path());

    cz(dir.path(), &config)
        .args(["--non-interactive", "commit", "-t", "feat", "-m", "x", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No staged changes found"))
        .stdout(predicate::str::contains("Line 1 will be cropped").not());
}

#[test]
fn test_commit_creates_git_commit() {
    let (dir, config) = workspace("");
    let repo = init_repo(dir.path());
    stage(&repo, "feature.txt");

    cz(dir.path(), &config)
        .args(["--non-interactive", "commit"])
        .args(["-t", "feat", "-s", "cli", "-m", "Add dry-run flag.", "-b", BODY])
        .args(["-f", "closes #42", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit has been created."));

    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(
        head.message().unwrap(),
        format!("feat(cli): add dry-run flag\n\n{}\n\ncloses #42", BODY)
    );
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("cz")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created cz.toml"));
    assert!(dir.path().join("cz.toml").exists());

    Command::cargo_bin("cz")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    Command::cargo_bin("cz")
        .unwrap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
