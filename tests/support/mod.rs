//! Test support utilities for pano integration tests.
//!
//! Provides an isolated data directory and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

use pano::core::constants;
use pano::core::keys::{FixedMachine, MachineKey};
use pano::core::store::Filesystem;
use pano::History;

/// Machine id every test process derives its key from.
pub const MACHINE_ID: &str = "0123456789abcdef0123456789abcdef";

/// Test environment with an isolated data directory.
///
/// Child processes get `PANO_HOME` and `PANO_MACHINE_ID` through their own
/// environment, so no process-global state is mutated and tests can run in
/// parallel.
pub struct Test {
    /// Temporary data directory
    pub home: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with text items added oldest first.
    pub fn with_items(items: &[&str]) -> Self {
        let t = Self::new();
        for text in items {
            let output = t.add(text);
            assert!(
                output.status.success(),
                "Failed to add {}: {}",
                text,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of the history database.
    pub fn database(&self) -> PathBuf {
        self.home.path().join(constants::DATABASE_FILE)
    }

    /// Path of the settings file.
    pub fn settings(&self) -> PathBuf {
        self.home.path().join(constants::SETTINGS_FILE)
    }

    /// Open the same history the binary uses, in process.
    pub fn history(&self) -> History {
        let key = MachineKey::derive(&FixedMachine(MACHINE_ID.to_string()))
            .expect("failed to derive key");
        History::open(&key, Filesystem::new(self.database())).expect("failed to open history")
    }
}
