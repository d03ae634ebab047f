//! Error types.
//!
//! Each area of the helper has its own error enum; [`Error`] wraps them all.
//! Messages never include store line contents or passwords.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for a credential lookup.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors decoding the credential-protocol request on stdin.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("malformed request line while reading '{expected}': {reason}")]
    MalformedLine {
        expected: &'static str,
        reason: String,
    },

    #[error("incomplete request: missing '{missing}'")]
    Incomplete { missing: &'static str },

    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors obtaining the raw bytes of a store file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decryption failed for {}: {reason}", .path.display())]
    DecryptionFailed { path: PathBuf, reason: String },
}

/// Errors decoding a store file line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected 6 space-separated tokens, found {tokens}")]
    MalformedCredentialLine { line: usize, tokens: usize },

    #[error("line {line}: login must be <username>^<application>")]
    MissingUserApplication { line: usize },

    #[error("line {line}: empty {field}")]
    EmptyField { line: usize, field: &'static str },

    #[error("line {line}: not valid UTF-8")]
    InvalidEncoding { line: usize },
}

/// Errors building the runtime configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot determine home directory")]
    NoHomeDir,

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
