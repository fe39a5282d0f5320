use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stagegrep() -> Command {
    Command::cargo_bin("stagegrep").unwrap()
}

// --- usage errors ---

#[test]
fn test_missing_arguments_exit_code_one() {
    stagegrep()
        .args(["4", "-1", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_no_arguments_exit_code_one() {
    stagegrep()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_zero_capacity_rejected() {
    stagegrep()
        .args(["0", "-1", "-1", "-1", "foo"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_non_numeric_capacity_rejected() {
    stagegrep()
        .args(["lots", "-1", "-1", "-1", "foo"])
        .assert()
        .failure()
        .code(1);
}

// --- full runs ---

#[test]
fn test_single_match_run() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "foo\nbar\n").unwrap();
    stagegrep()
        .current_dir(dir.path())
        .args(["4", "-1", "-1", "-1", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt: foo"))
        .stdout(predicate::str::contains("Total matches: 1"));
}

#[test]
fn test_empty_directory_run() {
    let dir = TempDir::new().unwrap();
    stagegrep()
        .current_dir(dir.path())
        .args(["8", "-1", "-1", "-1", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total matches: 0"));
}

#[test]
fn test_zero_matches_still_exits_zero() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "hay only\n").unwrap();
    stagegrep()
        .current_dir(dir.path())
        .args(["4", "-1", "-1", "-1", "needle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total matches: 0"));
}

#[test]
fn test_summary_reports_elapsed_time() {
    let dir = TempDir::new().unwrap();
    stagegrep()
        .current_dir(dir.path())
        .args(["4", "-1", "-1", "-1", "x"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Elapsed: \d+ ms").unwrap());
}

#[test]
fn test_min_size_filter_from_cli() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tiny.txt"), "foo\n").unwrap();
    // 4 bytes on disk; a min-size of 4 is strictly-greater and excludes it.
    stagegrep()
        .current_dir(dir.path())
        .args(["4", "4", "-1", "-1", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total matches: 0"));
    stagegrep()
        .current_dir(dir.path())
        .args(["4", "3", "-1", "-1", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total matches: 1"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_diagnostic_on_stderr() {
    use std::fs::{self, File};
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.txt"), "needle\n").unwrap();
    let secret = dir.path().join("secret.txt");
    fs::write(&secret, "needle\n").unwrap();
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
    if File::open(&secret).is_ok() {
        // Running as root; permission bits don't bite. Nothing to assert.
        return;
    }

    stagegrep()
        .current_dir(dir.path())
        .args(["4", "-1", "-1", "-1", "needle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok.txt: needle"))
        .stdout(predicate::str::contains("Total matches: 1"))
        .stderr(predicate::str::contains("secret.txt"));

    fs::set_permissions(&secret, fs::Permissions::from_mode(0o644)).unwrap();
}
