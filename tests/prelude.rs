//! Shared harness for the `msr` binary-level integration tests: drives the
//! compiled binary directly via `assert_cmd` rather than a bespoke
//! process harness.

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// An isolated `CONFIG_DIR` for one test run, with its own `.env`-free
/// environment so a developer's real Plex credentials never leak in.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn watched_state_path(&self) -> PathBuf {
        self.dir.path().join("watched_state.json")
    }

    /// A `msr` invocation rooted at this project's config directory, with
    /// the inherited environment cleared so only the variables a test sets
    /// explicitly can affect the run.
    pub fn msr(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("msr");
        cmd.env_clear();
        cmd.env("CONFIG_DIR", self.dir.path());
        cmd.env("RUN_ONLY_ONCE", "true");
        cmd.env("SYNC_PLAYLISTS", "false");
        cmd
    }
}
