#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway home directory with its own database.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    pub fn db_path(&self) -> String {
        self.home
            .path()
            .join("test_timed.db")
            .to_string_lossy()
            .to_string()
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".timed.conf")
    }

    /// `timed` bound to this home, without the `--db` override.
    pub fn bare(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("timed");
        cmd.env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path())
            .env_remove("TIMED_LOG");
        cmd
    }

    /// `timed --db <temp db>`
    pub fn timed(&self) -> Command {
        let mut cmd = self.bare();
        cmd.args(["--db", &self.db_path()]);
        cmd
    }
}
