//! Diagnostics.
//!
//! Off unless enabled through `LOGGING` or `--verbose`. When enabled, all
//! `tracing` events matching the filter go to `~/authinfo.log`, appended,
//! never to stdout or stderr. Passwords are never part of an event.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::config::Config;
use crate::core::constants;
use crate::error::ConfigError;

/// Install the file subscriber if `config.trace` is set.
///
/// # Errors
///
/// Returns `ConfigError::LogFile` if the log file cannot be opened.
pub fn init(config: &Config) -> Result<(), ConfigError> {
    if !config.trace {
        return Ok(());
    }

    let file = open_log(&config.log_file, constants::MAX_LOG_BYTES)?;

    let filter = EnvFilter::try_from_env(constants::LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init();

    Ok(())
}

/// Open `path` for appending, rotating it first if it exceeds `max_bytes`.
pub fn open_log(path: &Path, max_bytes: u64) -> Result<File, ConfigError> {
    rotate_if_needed(path, max_bytes);

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Move an oversized log to `<name>.bak`, replacing any older backup.
fn rotate_if_needed(path: &Path, max_bytes: u64) {
    if let Ok(meta) = fs::metadata(path) {
        if meta.len() > max_bytes {
            let backup = backup_path(path);
            let _ = fs::remove_file(&backup);
            let _ = fs::rename(path, &backup);
        }
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}
