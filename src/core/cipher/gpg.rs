//! GPG decryption backend.
//!
//! Decrypts store files with the GnuPG CLI.
//!
//! ## Requirements
//!
//! - `gpg` (or the program configured instead) must be on `PATH`
//! - The secret key must be in the keyring, or reachable through gpg-agent
//!
//! The child inherits this process's environment, so `GNUPGHOME`,
//! `GPG_AGENT_INFO` and friends apply as they would in the user's shell.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::trace;
use zeroize::Zeroizing;

use super::Decrypt;
use crate::error::StoreError;

/// GPG decryption backend using the gpg CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpg {
    program: OsString,
}

impl Gpg {
    /// Backend running `program` instead of `gpg`.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &std::ffi::OsStr {
        &self.program
    }

    /// Resolve the program on `PATH` (or as given, if it is a path).
    fn locate(&self, path: &Path) -> Result<PathBuf, StoreError> {
        which::which(&self.program).map_err(|e| StoreError::DecryptionFailed {
            path: path.to_path_buf(),
            reason: format!(
                "{} not found ({}). Install GnuPG from https://gnupg.org/download/",
                self.program.to_string_lossy(),
                e
            ),
        })
    }
}

impl Default for Gpg {
    fn default() -> Self {
        Self::new(crate::core::constants::GPG_PROGRAM)
    }
}

impl Decrypt for Gpg {
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<Vec<u8>>, StoreError> {
        let program = self.locate(path)?;

        let mut cmd = Command::new(&program);
        cmd.args(["--quiet", "--decrypt"]).arg(path);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        trace!(command = ?cmd, "decrypting with GPG");

        let output = cmd.output().map_err(|e| StoreError::DecryptionFailed {
            path: path.to_path_buf(),
            reason: format!("failed to run {}: {}", program.display(), e),
        })?;

        // Wrap first so a rejected buffer is scrubbed too.
        let plaintext = Zeroizing::new(output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            trace!(
                status = %output.status,
                stderr = %stderr.trim_end(),
                discarded_bytes = plaintext.len(),
                "gpg decrypt failed"
            );
            return Err(StoreError::DecryptionFailed {
                path: path.to_path_buf(),
                reason: format!(
                    "gpg exited with {}. Ensure the secret key is in your keyring.",
                    output.status
                ),
            });
        }

        trace!(plaintext_len = plaintext.len(), "decrypted with GPG");
        Ok(plaintext)
    }
}
