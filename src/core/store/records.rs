//! Store line grammar.
//!
//! One credential per line:
//!
//! ```text
//! machine <host> login <username>^<application> password <password>
//! ```
//!
//! Tokens are separated by single spaces and there must be exactly six of
//! them, so hosts and passwords cannot contain spaces. The keyword tokens at
//! positions 0, 2 and 4 are positional only: their text is not checked, and
//! `host example.com user alice^git pass s3cret` parses the same as the
//! canonical form.

use crate::core::domain::Credential;
use crate::error::ParseError;

const TOKENS: usize = 6;
const USER_APP_SEPARATOR: char = '^';

/// Parse one non-empty store line. `line_no` is 1-based and only used for
/// error reporting.
///
/// # Errors
///
/// Returns `ParseError::MalformedCredentialLine` if the line does not have
/// six tokens, `ParseError::MissingUserApplication` if the login token is
/// not exactly `<username>^<application>`, and `ParseError::EmptyField` for
/// an empty host or password token.
pub fn parse_line(line: &str, line_no: usize) -> Result<Credential, ParseError> {
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() != TOKENS {
        return Err(ParseError::MalformedCredentialLine {
            line: line_no,
            tokens: tokens.len(),
        });
    }

    let (username, application) = match tokens[3]
        .split(USER_APP_SEPARATOR)
        .collect::<Vec<_>>()
        .as_slice()
    {
        [username, application] if !username.is_empty() && !application.is_empty() => {
            (*username, *application)
        }
        _ => return Err(ParseError::MissingUserApplication { line: line_no }),
    };

    let host = tokens[1];
    if host.is_empty() {
        return Err(ParseError::EmptyField {
            line: line_no,
            field: "host",
        });
    }

    let password = tokens[5];
    if password.is_empty() {
        return Err(ParseError::EmptyField {
            line: line_no,
            field: "password",
        });
    }

    Ok(Credential::new(host, username, application, password))
}

/// Lazy, fail-fast iterator over the credentials of one store file.
///
/// Yields one item per non-empty line in file order. Stops for good after
/// the first error, so a malformed line is never skipped over.
pub struct Records<'a> {
    lines: std::iter::Enumerate<std::slice::Split<'a, u8, fn(&u8) -> bool>>,
    failed: bool,
}

impl<'a> Records<'a> {
    /// Iterate over the records of raw (already decrypted) store contents.
    pub fn new(raw: &'a [u8]) -> Self {
        let is_newline: fn(&u8) -> bool = |b| *b == b'\n';
        Self {
            lines: raw.split(is_newline).enumerate(),
            failed: false,
        }
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Credential, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for (index, bytes) in self.lines.by_ref() {
            let line_no = index + 1;
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            if bytes.is_empty() {
                continue;
            }

            let result = std::str::from_utf8(bytes)
                .map_err(|_| ParseError::InvalidEncoding { line: line_no })
                .and_then(|line| parse_line(line, line_no));

            self.failed = result.is_err();
            return Some(result);
        }

        None
    }
}

impl std::iter::FusedIterator for Records<'_> {}
