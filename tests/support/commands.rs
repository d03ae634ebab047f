//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a helper command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the temporary home directory
    /// - Diagnostics and gpg overrides cleared from the environment
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("git-credential-authinfo")
            .expect("failed to find git-credential-authinfo binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env_remove("LOGGING");
        cmd.env_remove("AUTHINFO_LOG");
        cmd.env_remove("AUTHINFO_GPG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Shortcut for `git-credential-authinfo get` with `request` on stdin.
    pub fn get(&self, request: &str) -> Output {
        self.cmd()
            .arg("get")
            .write_stdin(request)
            .output()
            .expect("failed to run git-credential-authinfo get")
    }

    /// Shortcut for `get` with diagnostics enabled through `LOGGING`.
    pub fn get_traced(&self, request: &str) -> Output {
        self.cmd()
            .arg("get")
            .env("LOGGING", "true")
            .write_stdin(request)
            .output()
            .expect("failed to run git-credential-authinfo get")
    }

    /// Run an arbitrary operation with `request` on stdin.
    pub fn operation(&self, operation: &str, request: &str) -> Output {
        self.cmd()
            .arg(operation)
            .write_stdin(request)
            .output()
            .expect("failed to run git-credential-authinfo")
    }
}
