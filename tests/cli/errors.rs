//! Error paths: exit status, messages, and hints.

use crate::support::*;
use std::fs;

#[test]
fn test_unknown_id_fails_with_hint() {
    let t = Test::with_items(&["a"]);
    for args in [["get", "123"], ["pin", "123"], ["rm", "123"]] {
        let output = t.cmd().args(args).output().unwrap();
        assert_failure(&output);
        assert_stderr_contains(&output, "item not found: 123");
        assert_stdout_contains(&output, "pano list");
    }
}

#[test]
fn test_other_machine_cannot_read_history() {
    let t = Test::with_items(&["bound to this machine"]);

    let output = t
        .cmd()
        .env("PANO_MACHINE_ID", "a-different-machine")
        .arg("list")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
    assert_stdout_contains(&output, "another machine");
}

#[test]
fn test_corrupt_database_is_not_reset() {
    let t = Test::new();
    fs::write(t.database(), "%%% not base64 %%%").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed envelope");

    // A failed open must not clobber the file with an empty history
    let output = t.add("new");
    assert_failure(&output);
    assert_eq!(
        fs::read_to_string(t.database()).unwrap(),
        "%%% not base64 %%%"
    );
}

#[test]
fn test_malformed_settings_fail() {
    let t = Test::new();
    fs::write(t.settings(), "max_items = [").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse settings");
}

#[test]
fn test_missing_file_argument() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["add", "does-not-exist.txt"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "io error");
}

#[test]
fn test_invalid_kind_rejected_by_parser() {
    let t = Test::new();
    let output = t.cmd().args(["add", "--kind", "video"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid value");
}

#[test]
fn test_watch_rejects_blank_command() {
    let t = Test::new();
    let output = t.cmd().args(["watch", "--command", "  "]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid clipboard command");
}
