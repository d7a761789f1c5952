//! Item commands.
//!
//! Implements add, list, get, pin, rm and clear.

use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::cli::output;
use crate::core::domain::{format_size, Advisory, Disposition, Item, ItemKind};
use crate::core::history::History;
use crate::error::{Result, StoreError};

const PREVIEW_CHARS: usize = 40;

/// Store content read from `file`, or stdin.
pub fn add(kind: ItemKind, file: Option<&Path>) -> Result<()> {
    let content = match file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    if content.is_empty() {
        output::warn("nothing to add");
        return Ok(());
    }

    info!(kind = %kind, size = content.len(), "adding item");
    let history = History::open_default()?;
    let outcome = history.add_item(kind, &content)?;

    match &outcome.disposition {
        Disposition::Inserted(id) => output::success(&format!("added {}", output::id(id))),
        Disposition::Promoted(id) => {
            output::success(&format!("already stored, moved to top: {}", output::id(id)))
        }
        Disposition::Refused => {}
    }

    match outcome.advisory {
        Some(Advisory::LimitWarning { remaining }) => output::warn(&format!(
            "{} slot{} left",
            remaining,
            if remaining == 1 { "" } else { "s" }
        )),
        Some(Advisory::LimitFull) => {
            output::warn(&format!(
                "history full ({} items), nothing stored",
                history.max_items()
            ));
            output::hint("remove or unpin items, or run: pano limit <N>");
        }
        None => {}
    }

    Ok(())
}

/// List items in display order.
pub fn list(json: bool) -> Result<()> {
    let history = History::open_default()?;
    let items = history.get_all_items();

    if json {
        let rows: Vec<serde_json::Value> = items
            .iter()
            .map(|item| {
                serde_json::json!({
                    "id": item.id(),
                    "type": item.kind(),
                    "size": item.size(),
                    "timestamp": item.timestamp().to_rfc3339(),
                    "pinned": item.is_pinned(),
                })
            })
            .collect();
        let out = serde_json::to_string_pretty(&rows).map_err(StoreError::Serialize)?;
        println!("{}", out);
        return Ok(());
    }

    if items.is_empty() {
        output::dimmed("history is empty");
        return Ok(());
    }

    for item in &items {
        let marker = if item.is_pinned() {
            output::pin_marker()
        } else {
            " ".to_string()
        };
        println!(
            "{} {}  {:<5}  {:>8}  {}  {}",
            marker,
            output::id(item.id()),
            item.kind().as_str(),
            format_size(item.size()),
            item.timestamp()
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S"),
            preview(&history, item)?
        );
    }

    output::dimmed(&history.status().to_string());
    Ok(())
}

/// One-line summary of an item's content.
fn preview(history: &History, item: &Item) -> Result<String> {
    if item.kind() == ItemKind::Image {
        return Ok("[image]".to_string());
    }

    let (_, plaintext) = history.get_item(item.id())?;
    let text = String::from_utf8_lossy(&plaintext);
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();

    let mut preview: String = line.chars().take(PREVIEW_CHARS).collect();
    if line.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    Ok(preview)
}

/// Write an item's decrypted content to stdout.
pub fn get(id: &str) -> Result<()> {
    let history = History::open_default()?;
    let (_, plaintext) = history.get_item(id)?;

    // Raw bytes for piping, no decoration
    let mut stdout = io::stdout().lock();
    stdout.write_all(&plaintext)?;
    stdout.flush()?;
    Ok(())
}

/// Toggle an item's pinned flag.
pub fn pin(id: &str) -> Result<()> {
    let history = History::open_default()?;
    if history.toggle_pin(id)? {
        output::success(&format!("pinned {}", output::id(id)));
    } else {
        output::success(&format!("unpinned {}", output::id(id)));
    }
    Ok(())
}

/// Remove one item.
pub fn rm(id: &str) -> Result<()> {
    let history = History::open_default()?;
    history.delete_item(id)?;
    output::success(&format!("removed {}", output::id(id)));
    Ok(())
}

/// Remove every item after confirmation.
pub fn clear(force: bool) -> Result<()> {
    let history = History::open_default()?;
    let count = history.item_count();

    if count == 0 {
        output::dimmed("history is already empty");
        return Ok(());
    }

    if !force {
        if !io::stdin().is_terminal() {
            output::warn("refusing to clear without confirmation");
            output::hint("run: pano clear --force");
            return Ok(());
        }

        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Remove all {} items, pinned included?", count))
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("cancelled");
            return Ok(());
        }
    }

    history.clear_all()?;
    output::success(&format!(
        "cleared {} item{}",
        count,
        if count == 1 { "" } else { "s" }
    ));
    Ok(())
}
