//! Tests for `pano limit` and capacity behavior through the CLI.

use crate::support::*;
use pano::core::domain::ItemKind;
use std::fs;

#[test]
fn test_limit_shows_default() {
    let t = Test::new();
    let output = t.limit(None);
    assert_success(&output);
    assert_stdout_contains(&output, "limit  100");
    assert_stdout_contains(&output, "10-500");
}

#[test]
fn test_limit_persists_to_settings() {
    let t = Test::new();
    let output = t.limit(Some(42));
    assert_success(&output);
    assert_stdout_contains(&output, "limit set to 42");

    let settings = fs::read_to_string(t.settings()).unwrap();
    assert!(settings.contains("max_items = 42"));
    assert_stdout_contains(&t.limit(None), "limit  42");
}

#[test]
fn test_limit_is_clamped() {
    let t = Test::new();

    let output = t.limit(Some(3));
    assert_success(&output);
    assert_stdout_contains(&output, "3 is out of range, using 10");

    let output = t.limit(Some(9000));
    assert_success(&output);
    assert_stdout_contains(&output, "using 500");
}

#[test]
fn test_lowering_limit_evicts_oldest_unpinned() {
    let t = Test::new();
    {
        let history = t.history();
        for i in 0..3 {
            let id = history
                .add_item(ItemKind::Text, format!("pinned {}", i).as_bytes())
                .unwrap()
                .id()
                .unwrap()
                .to_string();
            history.toggle_pin(&id).unwrap();
        }
        for i in 0..12 {
            history
                .add_item(ItemKind::Text, format!("item {}", i).as_bytes())
                .unwrap();
        }
    }

    let output = t.limit(Some(10));
    assert_success(&output);
    assert_stdout_contains(&output, "evicted 5 oldest items");

    let history = t.history();
    assert_eq!(history.item_count(), 10);
    assert_eq!(history.pinned_count(), 3);

    let output = t.list();
    for i in 5..12 {
        assert_stdout_contains(&output, &format!("item {}", i));
    }
    assert_stdout_excludes(&output, "item 4\n");
}

#[test]
fn test_warning_when_few_slots_remain() {
    let t = Test::new();
    assert_success(&t.limit(Some(10)));

    let output = t.add("first");
    assert_success(&output);
    assert_stdout_contains(&output, "9 slots left");
}

#[test]
fn test_full_history_refuses_new_content() {
    let t = Test::new();
    assert_success(&t.limit(Some(10)));
    {
        // Cap only lives in settings, so apply it to the in-process handle too
        let history = t.history();
        history.set_max_items(10).unwrap();
        for i in 0..10 {
            history
                .add_item(ItemKind::Text, format!("fill {}", i).as_bytes())
                .unwrap();
        }
    }

    let output = t.add("overflow");
    assert_success(&output);
    assert_stdout_contains(&output, "history full");
    assert_eq!(t.history().item_count(), 10);

    // Re-adding stored content still succeeds
    let output = t.add("fill 0");
    assert_success(&output);
    assert_stdout_contains(&output, "moved to top");
}

#[test]
fn test_reads_keep_pinned_overflow() {
    let t = Test::new();
    assert_success(&t.limit(Some(10)));
    let pinned = {
        let history = t.history();
        history.set_max_items(10).unwrap();
        for i in 0..10 {
            history
                .add_item(ItemKind::Text, format!("fill {}", i).as_bytes())
                .unwrap();
        }
        let pinned = history.storage_order()[0].id().to_string();
        history.toggle_pin(&pinned).unwrap();
        assert!(history.add_item(ItemKind::Text, b"fill 10").unwrap().stored());
        pinned
    };
    let before = fs::read(t.database()).unwrap();

    assert_success(&t.list());
    assert_success(&t.status());
    assert_success(&t.get(&pinned));
    assert_success(&t.limit(None));

    assert_eq!(fs::read(t.database()).unwrap(), before);
    assert_eq!(t.ids().len(), 11);
}
