//! Command-line interface.

pub mod completions;
pub mod items;
pub mod limit;
pub mod output;
pub mod status;
pub mod watch;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::domain::ItemKind;

/// Pano - encrypted clipboard history.
#[derive(Parser)]
#[command(
    name = "pano",
    about = "Encrypted, machine-bound clipboard history",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Store content from a file, or stdin if none is given
    Add {
        /// Content kind
        #[arg(short, long, value_enum, default_value_t = Kind::Text)]
        kind: Kind,
        /// File to read
        file: Option<PathBuf>,
    },

    /// List stored items, pinned first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an item's content to stdout
    Get {
        /// Item id
        id: String,
    },

    /// Toggle an item's pinned flag
    Pin {
        /// Item id
        id: String,
    },

    /// Remove an item
    Rm {
        /// Item id
        id: String,
    },

    /// Remove every item, pinned included
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show or set the cap on non-pinned items
    Limit {
        /// New cap (clamped to 10..=500)
        max: Option<usize>,
    },

    /// Show item counts and limits
    Status,

    /// Poll the system clipboard and record changes
    Watch {
        /// Command that prints the clipboard (auto-detected if omitted)
        #[arg(short, long)]
        command: Option<String>,
        /// Poll interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Content kind accepted by `add`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Text,
    Image,
}

impl From<Kind> for ItemKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Text => ItemKind::Text,
            Kind::Image => ItemKind::Image,
        }
    }
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Add { kind, file } => items::add(kind.into(), file.as_deref()),
        List { json } => items::list(json),
        Get { id } => items::get(&id),
        Pin { id } => items::pin(&id),
        Rm { id } => items::rm(&id),
        Clear { force } => items::clear(force),
        Limit { max } => limit::execute(max),
        Status => status::execute(),
        Watch {
            command,
            interval_ms,
        } => watch::execute(command.as_deref(), interval_ms),
        Completions { shell } => completions::execute(shell),
    }
}
