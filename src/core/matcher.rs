//! Credential matching.

use tracing::trace;

use crate::core::domain::{Credential, Remote};
use crate::error::ParseError;

/// Return the first credential in `records` that answers `remote` for
/// `scope`.
///
/// Records are consumed in order and consumption stops at the first match,
/// so earlier lines win ties. `Ok(None)` means the records were exhausted
/// without a match.
///
/// # Errors
///
/// Returns the first `ParseError` the records yield. Records after it are
/// never looked at, even if one of them would match.
pub fn find_match<I>(
    remote: &Remote,
    records: I,
    scope: &str,
) -> Result<Option<Credential>, ParseError>
where
    I: IntoIterator<Item = Result<Credential, ParseError>>,
{
    for record in records {
        let credential = record?;

        let matched = credential.matches(remote, scope);
        trace!(
            credential = ?credential,
            host_equal = credential.host() == remote.host(),
            username_equal = credential.username() == remote.username(),
            scope_equal = credential.application() == scope,
            matched,
            "checked credential"
        );

        if matched {
            return Ok(Some(credential));
        }
    }

    Ok(None)
}
