//! Runtime configuration.
//!
//! Built once at startup from the home directory, the environment and the
//! command line, then passed by reference to everything that needs it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::constants;
use crate::core::store::Candidates;
use crate::error::{ConfigError, Result};

/// Settings supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Force diagnostics on regardless of `LOGGING`.
    pub verbose: bool,
    /// Decryption program instead of `gpg`.
    pub gpg_program: Option<OsString>,
}

/// Configuration for one lookup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application scope a credential must carry to match.
    pub scope: &'static str,
    /// Store files to consider, highest priority first.
    pub candidates: Candidates,
    /// Program used to decrypt encrypted store files.
    pub gpg_program: OsString,
    /// Whether diagnostics are written to `log_file`.
    pub trace: bool,
    /// Diagnostics log file.
    pub log_file: PathBuf,
}

impl Config {
    /// Defaults for a user whose home directory is `home`.
    pub fn new(home: &Path) -> Self {
        Self {
            scope: constants::SCOPE,
            candidates: Candidates::in_home(home),
            gpg_program: OsString::from(constants::GPG_PROGRAM),
            trace: false,
            log_file: home.join(constants::LOG_FILE),
        }
    }

    /// Load configuration for the current user.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the home directory is unknown.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let trace_env = std::env::var(constants::TRACE_ENV).ok();

        Ok(Self::new(&home).with_overrides(overrides, trace_env.as_deref()))
    }

    /// Apply command-line overrides and the raw value of `LOGGING`.
    pub fn with_overrides(mut self, overrides: Overrides, trace_env: Option<&str>) -> Self {
        self.trace = overrides.verbose || trace_env.and_then(parse_bool).unwrap_or(false);
        if let Some(program) = overrides.gpg_program {
            self.gpg_program = program;
        }
        self
    }
}

/// Parse a boolean literal.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`; anything
/// else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
