//! Watch command.
//!
//! Runs the clipboard monitor in the foreground until interrupted. Every
//! stored change is already persisted, so Ctrl-C loses nothing.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::domain::Disposition;
use crate::core::history::History;
use crate::core::monitor::{CommandSource, Monitor};
use crate::error::{MonitorError, Result};

/// Poll the clipboard and record changes.
pub fn execute(command: Option<&str>, interval_ms: Option<u64>) -> Result<()> {
    let source = match command {
        Some(cmd) => {
            CommandSource::parse(cmd).ok_or_else(|| MonitorError::InvalidCommand(cmd.to_string()))?
        }
        None => CommandSource::detect().ok_or(MonitorError::NoSource)?,
    };

    let settings = Settings::load()?;
    let interval = Duration::from_millis(interval_ms.unwrap_or(settings.poll_interval_ms));
    let history = Arc::new(History::open_with_settings(&settings)?);

    history.set_on_limit_warn(|remaining| {
        if remaining == 0 {
            output::warn("history full, clipboard change not stored");
        } else {
            output::warn(&format!("{} slots left", remaining));
        }
    });

    let mut monitor = Monitor::new(Arc::clone(&history), source)
        .with_interval(interval)
        .on_change(|kind, outcome| match &outcome.disposition {
            Disposition::Inserted(id) => output::success(&format!("{} {}", kind, output::id(id))),
            Disposition::Promoted(id) => output::dimmed(&format!("{} {} (moved to top)", kind, id)),
            Disposition::Refused => {}
        });

    info!(interval_ms = monitor.interval().as_millis() as u64, "watching clipboard");
    output::dimmed(&format!("watching clipboard ({})", history.status()));

    let stop = AtomicBool::new(false);
    monitor.run(&stop);
    Ok(())
}
