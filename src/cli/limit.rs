//! Limit command.

use tracing::info;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::history::History;
use crate::error::Result;

/// Show the cap, or apply and save a new one.
pub fn execute(max: Option<usize>) -> Result<()> {
    let mut settings = Settings::load()?;
    let history = History::open_with_settings(&settings)?;

    let Some(requested) = max else {
        output::kv("limit", history.max_items());
        output::kv("range", format!("{}-{}", constants::MIN_MAX_ITEMS, constants::MAX_MAX_ITEMS));
        return Ok(());
    };

    info!(requested, "setting limit");
    let before = history.item_count();
    let applied = history.set_max_items(requested)?;
    let evicted = before - history.item_count();

    settings.max_items = applied;
    settings.save()?;

    if applied != requested {
        output::warn(&format!("{} is out of range, using {}", requested, applied));
    }
    output::success(&format!("limit set to {}", applied));
    if evicted > 0 {
        output::warn(&format!(
            "evicted {} oldest item{}",
            evicted,
            if evicted == 1 { "" } else { "s" }
        ));
    }
    Ok(())
}
