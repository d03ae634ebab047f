//! Credential-protocol request parsing.
//!
//! The caller writes a block of `key=value` lines to stdin, ended by a blank
//! line or end of stream. This is a positional reader, not a general
//! key-value parser: after any leading extension keys (see
//! [`EXTENSION_KEYS`]) it expects exactly `protocol`, `host`, `username` in
//! that order, and stops reading once `username` is known. Anything out of
//! order is rejected rather than reordered.

use std::io::{BufRead, Lines};
use tracing::{debug, trace};

use crate::core::constants::EXTENSION_KEYS;
use crate::core::domain::Remote;
use crate::error::RequestError;

/// Parse a request block into a [`Remote`].
///
/// # Errors
///
/// Returns `RequestError::MalformedLine` for a line without `=`, with an
/// empty value, or with a key other than the one expected next, and
/// `RequestError::Incomplete` if the block ends before `username`.
pub fn parse_request<R: BufRead>(reader: R) -> Result<Remote, RequestError> {
    let mut lines = reader.lines();

    let protocol = next_value(&mut lines, "protocol", true)?;
    let host = next_value(&mut lines, "host", false)?;
    let username = next_value(&mut lines, "username", false)?;

    let remote = Remote::new(protocol, host, username);
    debug!(%remote, "parsed request");
    Ok(remote)
}

/// Read the value of the next line, which must carry `expected`.
fn next_value<R: BufRead>(
    lines: &mut Lines<R>,
    expected: &'static str,
    skip_extensions: bool,
) -> Result<String, RequestError> {
    loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(RequestError::Incomplete { missing: expected }),
        };
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if line.is_empty() {
            return Err(RequestError::Incomplete { missing: expected });
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| RequestError::MalformedLine {
                expected,
                reason: "missing '='".to_string(),
            })?;

        if skip_extensions && EXTENSION_KEYS.contains(&key) {
            trace!(key, "skipping extension key");
            continue;
        }

        if key != expected {
            return Err(RequestError::MalformedLine {
                expected,
                reason: format!("found key '{}'", key),
            });
        }

        if value.is_empty() {
            return Err(RequestError::MalformedLine {
                expected,
                reason: "empty value".to_string(),
            });
        }

        return Ok(value.to_string());
    }
}
