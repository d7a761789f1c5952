//! Quick status overview command.

use crate::cli::output;
use crate::core::domain::format_size;
use crate::core::history::History;
use crate::core::keys::MachineKey;
use crate::error::Result;

/// Show counts, limits and where the history lives.
pub fn execute() -> Result<()> {
    let history = History::open_default()?;
    let status = history.status();
    let bytes: usize = history.get_all_items().iter().map(|i| i.size()).sum();

    output::section("Pano Status");
    output::kv("items", &status);
    output::kv("free", format!("{} slots", status.remaining));
    output::kv("content", format_size(bytes));
    output::kv("file", output::path(&status.location));
    output::kv("key", MachineKey::for_host()?.fingerprint());

    if status.is_full() {
        println!();
        output::warn("history is full; new content will be refused");
        output::hint("run: pano limit <N>");
    }
    Ok(())
}
