//! Tests for `pano status`, `--verbose` and completions.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_status_summary() {
    let t = Test::with_items(&["a", "b"]);
    let pinned = t.ids()[0].clone();
    assert_success(&t.pin(&pinned));

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "Pano Status");
    assert_stdout_contains(&output, "2/100 items - 1 pinned");
    assert_stdout_contains(&output, "99 slots");
    assert_stdout_contains(&output, "clipboard.db");
}

#[test]
fn test_status_on_fresh_home() {
    let t = Test::new();
    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "0/100 items - 0 pinned");
}

#[test]
fn test_key_fingerprint_is_stable() {
    let t = Test::new();
    let key_line = |output: &std::process::Output| {
        stdout(output)
            .lines()
            .find(|l| l.trim_start().starts_with("key"))
            .map(str::to_string)
            .expect("no key line")
    };
    assert_eq!(key_line(&t.status()), key_line(&t.status()));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::new();
    let output = t.cmd().args(["--verbose", "status"]).output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "history opened");
    assert_stdout_excludes(&output, "history opened");
}

#[test]
fn test_quiet_by_default() {
    let t = Test::new();
    let output = t.status();
    assert_success(&output);
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_completions() {
    let t = Test::new();
    for shell in ["bash", "zsh", "fish"] {
        t.cmd()
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("pano"));
    }
}

#[test]
fn test_help_lists_commands() {
    let t = Test::new();
    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("watch")
                .and(predicate::str::contains("limit"))
                .and(predicate::str::contains("clear")),
        );
}
