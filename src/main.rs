//! Pano - encrypted clipboard history.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pano::cli::output;
use pano::cli::{execute, Cli};
use pano::core::constants;
use pano::error::{Error, MonitorError, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("pano=debug")
        } else {
            EnvFilter::new("pano=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Store(StoreError::NotFound(_)) => Some("run: pano list"),
            Error::Store(StoreError::NoDataDir) => Some("set PANO_HOME to a writable directory"),
            Error::Monitor(MonitorError::NoSource) => {
                Some("install wl-paste, xclip or pbpaste, or pass --command")
            }
            e if e.is_decryption() => {
                Some("the history was written on another machine or is corrupted")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
