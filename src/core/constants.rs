//! Constants used throughout the helper.
//!
//! Centralizes magic strings and configuration values.

/// Application scope a stored credential must carry to be eligible.
pub const SCOPE: &str = "git";

/// Store files relative to HOME, highest priority first.
pub const STORE_FILES: &[&str] = &[".authinfo.gpg", ".authinfo", ".netrc.gpg", ".netrc"];

/// Extension marking a store file as gpg-encrypted.
pub const ENCRYPTED_EXTENSION: &str = "gpg";

/// Default decryption program.
pub const GPG_PROGRAM: &str = "gpg";

/// Environment variable overriding the decryption program.
pub const GPG_PROGRAM_ENV: &str = "AUTHINFO_GPG";

/// Environment variable enabling diagnostics (boolean literal).
pub const TRACE_ENV: &str = "LOGGING";

/// Environment variable holding an `EnvFilter` directive for diagnostics.
pub const LOG_FILTER_ENV: &str = "AUTHINFO_LOG";

/// Default filter directive when diagnostics are enabled.
pub const DEFAULT_LOG_FILTER: &str = "authinfo=trace";

/// Diagnostics log file relative to HOME.
pub const LOG_FILE: &str = "authinfo.log";

/// Size above which the log file is rotated before opening.
pub const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

/// Request keys the caller may send ahead of `protocol`. Read and ignored.
pub const EXTENSION_KEYS: &[&str] = &[
    "capability[]",
    "authtype",
    "credential",
    "ephemeral",
    "state[]",
    "state",
    "wwwauth[]",
];

