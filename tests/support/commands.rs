//! Command helper methods for Test.

use super::{Test, MACHINE_ID};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a pano command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - PANO_HOME set to the temporary data directory
    /// - PANO_MACHINE_ID fixed so every run derives the same key
    /// - NO_COLOR so output can be matched literally
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("pano").expect("failed to find pano binary");
        cmd.env("PANO_HOME", self.home.path());
        cmd.env("PANO_MACHINE_ID", MACHINE_ID);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("PANO_LOG");
        cmd
    }

    /// Shortcut for `echo -n TEXT | pano add`.
    pub fn add(&self, text: &str) -> Output {
        self.cmd()
            .arg("add")
            .write_stdin(text.to_string())
            .output()
            .expect("failed to run pano add")
    }

    /// Shortcut for `pano add --kind image FILE`.
    pub fn add_image(&self, path: &std::path::Path) -> Output {
        self.cmd()
            .args(["add", "--kind", "image"])
            .arg(path)
            .output()
            .expect("failed to run pano add --kind image")
    }

    /// Shortcut for `pano list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run pano list")
    }

    /// Shortcut for `pano list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run pano list --json")
    }

    /// Ids in display order, via `pano list --json`.
    pub fn ids(&self) -> Vec<String> {
        let output = self.list_json();
        assert!(output.status.success(), "pano list --json failed");
        let rows: Vec<serde_json::Value> =
            serde_json::from_slice(&output.stdout).expect("list --json is not JSON");
        rows.iter()
            .map(|r| r["id"].as_str().expect("missing id").to_string())
            .collect()
    }

    /// Shortcut for `pano get`.
    pub fn get(&self, id: &str) -> Output {
        self.cmd()
            .args(["get", id])
            .output()
            .expect("failed to run pano get")
    }

    /// Shortcut for `pano pin`.
    pub fn pin(&self, id: &str) -> Output {
        self.cmd()
            .args(["pin", id])
            .output()
            .expect("failed to run pano pin")
    }

    /// Shortcut for `pano rm`.
    pub fn rm(&self, id: &str) -> Output {
        self.cmd()
            .args(["rm", id])
            .output()
            .expect("failed to run pano rm")
    }

    /// Shortcut for `pano clear --force`.
    pub fn clear_force(&self) -> Output {
        self.cmd()
            .args(["clear", "--force"])
            .output()
            .expect("failed to run pano clear --force")
    }

    /// Shortcut for `pano limit [N]`.
    pub fn limit(&self, max: Option<usize>) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("limit");
        if let Some(max) = max {
            cmd.arg(max.to_string());
        }
        cmd.output().expect("failed to run pano limit")
    }

    /// Shortcut for `pano status`.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run pano status")
    }
}
