//! Test support utilities for git-credential-authinfo integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// Each test gets its own temporary HOME, so store files and the log file
/// never touch the real user's. No process-global state is mutated, so
/// tests can safely run in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a test environment with an empty home directory.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with one store file written.
    pub fn with_store(name: &str, contents: &str) -> Self {
        let t = Self::new();
        t.write_store(name, contents);
        t
    }

    /// Write `contents` to `name` under the home directory.
    pub fn write_store(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.path().join(name);
        std::fs::write(&path, contents).expect("failed to write store file");
        path
    }

    /// Path of the diagnostics log.
    pub fn log_path(&self) -> PathBuf {
        self.home.path().join("authinfo.log")
    }

    /// Contents of the diagnostics log, empty if it does not exist.
    pub fn log(&self) -> String {
        std::fs::read_to_string(self.log_path()).unwrap_or_default()
    }
}
