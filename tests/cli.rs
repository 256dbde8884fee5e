//! Integration tests for the versioner binary

mod common;

use assert_cmd::Command;
use common::{create_project, manifest_version, read_record, record, write_record};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The binary, isolated from the caller's versioner settings
fn versioner(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("versioner").unwrap();
    cmd.current_dir(dir)
        .env("VERSIONER_COLOR", "never")
        .env("NO_COLOR", "1")
        .env_remove("VERSIONER_PLATFORM")
        .env_remove("VERSIONER_MANIFEST")
        .env_remove("VERSIONER_RECORD")
        .env_remove("VERSIONER_LOG");
    cmd
}

#[test]
fn test_help_outside_project() {
    let dir = TempDir::new().unwrap();

    versioner(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--major"))
        .stdout(predicate::str::contains("--push"))
        .stdout(predicate::str::contains("git"));

    assert!(!dir.path().join("version.json").exists());
}

#[test]
fn test_version_outside_project() {
    let dir = TempDir::new().unwrap();

    for flag in ["-v", "--version"] {
        versioner(dir.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();

    versioner(dir.path())
        .arg("--minor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_errors_follow_verbosity() {
    let dir = TempDir::new().unwrap();

    versioner(dir.path())
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    versioner(dir.path())
        .arg("--silent")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn test_bump_with_configured_platform() {
    let project = create_project("1.2.3");

    versioner(project.path())
        .env("VERSIONER_PLATFORM", "beta-")
        .arg("--core")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your version: beta-1.3.3-0"));

    assert_eq!(read_record(project.path()), record(1, 3, 3, "beta-", 0));
    assert_eq!(manifest_version(project.path()), "1.3.3");
}

#[test]
fn test_platform_from_env_file() {
    let project = create_project("0.1.0");
    fs::write(project.path().join(".env"), "VERSIONER_PLATFORM=web-\n").unwrap();

    versioner(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your version: web-0.1.0-0"));
}

#[test]
fn test_env_file_with_bad_line_still_applies() {
    let project = create_project("0.1.0");
    fs::write(
        project.path().join(".env"),
        "VERSIONER_PLATFORM=web-\nthis line is not an assignment\nOTHER_TOOL_SETTING=1\n",
    )
    .unwrap();

    versioner(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your version: web-0.1.0-0"));
}

#[test]
fn test_platform_prompt() {
    let project = create_project("1.2.3");

    versioner(project.path())
        .write_stdin("\nbeta-\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Write your platform"))
        .stdout(predicate::str::contains("Platform is empty"))
        .stdout(predicate::str::contains("Your version: beta-1.2.3-0"));

    assert_eq!(read_record(project.path()), record(1, 2, 3, "beta-", 0));
}

#[test]
fn test_platform_prompt_closed_input_fails() {
    let project = create_project("1.2.3");

    versioner(project.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"));

    assert!(!project.path().join("version.json").exists());
}

#[test]
fn test_build_counter_across_runs() {
    let project = create_project("1.2.3");
    write_record(project.path(), &record(1, 2, 3, "beta-", 5));

    versioner(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("beta-1.2.3-6"));
    versioner(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("beta-1.2.3-7"));

    assert_eq!(read_record(project.path()).build, 7);
}

#[test]
fn test_git_without_message() {
    let project = create_project("1.2.3");
    write_record(project.path(), &record(1, 2, 3, "beta-", 5));

    versioner(project.path())
        .env("VERSIONER_GIT", "versioner-no-such-git")
        .args(["--major", "git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("commit message"));

    assert_eq!(read_record(project.path()), record(2, 2, 3, "beta-", 0));
    assert_eq!(manifest_version(project.path()), "2.2.3");
}

#[test]
fn test_push_without_git_is_ignored() {
    let project = create_project("1.2.3");
    write_record(project.path(), &record(1, 2, 3, "beta-", 5));

    versioner(project.path())
        .env("VERSIONER_GIT", "versioner-no-such-git")
        .args(["--push", "--rc"])
        .assert()
        .success();
}

#[test]
fn test_git_client_failure_is_reported() {
    let project = create_project("1.2.3");
    write_record(project.path(), &record(1, 2, 3, "beta-", 5));

    versioner(project.path())
        .env("VERSIONER_GIT", "false")
        .args(["git", "release"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("git add failed"));
}

#[test]
fn test_malformed_version_writes_nothing() {
    let project = create_project("1.2.3.4");

    versioner(project.path())
        .env("VERSIONER_PLATFORM", "beta-")
        .arg("--minor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a major.core.minor version"));

    assert!(!project.path().join("version.json").exists());
}

#[test]
fn test_quiet_suppresses_version_line() {
    let project = create_project("1.2.3");

    versioner(project.path())
        .env("VERSIONER_PLATFORM", "beta-")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
