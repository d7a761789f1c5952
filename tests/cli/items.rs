//! Tests for `pano add/list/get/pin/rm/clear`.

use crate::support::*;
use pano::core::domain::ItemKind;
use std::fs;

#[test]
fn test_add_and_get_roundtrip() {
    let t = Test::new();
    assert_roundtrip(&t, "postgres://localhost/db");
}

#[test]
fn test_get_preserves_bytes_exactly() {
    let t = Test::new();
    let text = "  line one\n\tline two\n\n";
    let output = t.add(text);
    assert_success(&output);

    let id = t.ids().remove(0);
    assert_eq!(t.get(&id).stdout, text.as_bytes());
}

#[test]
fn test_add_reports_id() {
    let t = Test::new();
    let output = t.add("hello");
    assert_success(&output);
    assert_stdout_contains(&output, "added");

    let ids = t.ids();
    assert_eq!(ids.len(), 1);
    assert_stdout_contains(&output, &ids[0]);
}

#[test]
fn test_add_duplicate_moves_to_top() {
    let t = Test::with_items(&["first", "second"]);
    let before = t.ids();

    let output = t.add("first");
    assert_success(&output);
    assert_stdout_contains(&output, "moved to top");

    let after = t.ids();
    assert_eq!(after.len(), 2);
    assert_eq!(after, vec![before[1].clone(), before[0].clone()]);
}

#[test]
fn test_add_empty_input_is_noop() {
    let t = Test::new();
    let output = t.add("");
    assert_success(&output);
    assert_stdout_contains(&output, "nothing to add");
    assert!(!t.database().exists());
}

#[test]
fn test_add_image_from_file() {
    let t = Test::new();
    let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let path = t.home.path().join("shot.png");
    fs::write(&path, &bytes).unwrap();

    let output = t.add_image(&path);
    assert_success(&output);

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "image");
    assert_stdout_contains(&output, "[image]");
    assert_stdout_contains(&output, "4.0 KB");

    let id = t.ids().remove(0);
    assert_eq!(t.get(&id).stdout, bytes);
}

#[test]
fn test_list_empty() {
    let t = Test::new();
    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "history is empty");
}

#[test]
fn test_list_shows_preview_and_status() {
    let t = Test::with_items(&["alpha", "a much longer entry that keeps going well past the preview width"]);
    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "alpha");
    assert_stdout_contains(&output, "...");
    assert_stdout_contains(&output, "2/100 items - 0 pinned");
}

#[test]
fn test_list_json_fields() {
    let t = Test::with_items(&["abc"]);
    let output = t.list_json();
    assert_success(&output);

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["type"], "text");
    assert_eq!(rows[0]["size"], 3);
    assert_eq!(rows[0]["pinned"], false);
    assert!(rows[0]["timestamp"].is_string());
    assert_stdout_excludes(&output, "abc\"");
}

#[test]
fn test_pin_moves_to_front_of_listing() {
    let t = Test::with_items(&["old", "new"]);
    let ids = t.ids();
    let old = ids[1].clone();

    let output = t.pin(&old);
    assert_success(&output);
    assert_stdout_contains(&output, "pinned");

    assert_eq!(t.ids()[0], old);
    assert_stdout_contains(&t.list(), "1 pinned");

    let output = t.pin(&old);
    assert_success(&output);
    assert_stdout_contains(&output, "unpinned");
}

#[test]
fn test_rm() {
    let t = Test::with_items(&["keep", "drop"]);
    let drop = t.ids()[0].clone();

    let output = t.rm(&drop);
    assert_success(&output);
    assert_stdout_contains(&output, "removed");

    let ids = t.ids();
    assert_eq!(ids.len(), 1);
    assert!(!ids.contains(&drop));
}

#[test]
fn test_clear_without_force_refuses_when_not_interactive() {
    let t = Test::with_items(&["a", "b"]);
    let output = t.cmd().arg("clear").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "refusing");
    assert_eq!(t.ids().len(), 2);
}

#[test]
fn test_clear_force_removes_pinned_too() {
    let t = Test::with_items(&["a", "b"]);
    let first = t.ids()[0].clone();
    assert_success(&t.pin(&first));

    let output = t.clear_force();
    assert_success(&output);
    assert_stdout_contains(&output, "cleared 2 items");
    assert!(t.ids().is_empty());
}

#[test]
fn test_cli_and_library_share_history() {
    let t = Test::with_items(&["from cli"]);

    let history = t.history();
    assert_eq!(history.item_count(), 1);
    history.add_item(ItemKind::Text, b"from library").unwrap();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "from library");
    assert_stdout_contains(&output, "from cli");
}

#[cfg(unix)]
#[test]
fn test_database_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_items(&["secret"]);
    let mode = fs::metadata(t.database()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_database_never_holds_plaintext() {
    let t = Test::with_items(&["hunter2-very-secret"]);
    let raw = fs::read_to_string(t.database()).unwrap();
    assert!(!raw.contains("hunter2"));
    assert!(!raw.contains("\"type\""));
}
