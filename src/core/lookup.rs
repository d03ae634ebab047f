//! Credential lookup.
//!
//! Ties the pieces together: request in, first existing store file loaded
//! and matched, response out.
//!
//! Only the highest-priority store file that exists is consulted. If it
//! parses cleanly but holds no match, the lookup ends with no answer; lower
//! priority files are not tried. Keeping several store files around is meant
//! for migrating between formats, not for merging their contents.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::core::cipher::Decrypt;
use crate::core::config::Config;
use crate::core::domain::{Credential, Remote};
use crate::core::matcher::find_match;
use crate::core::request::parse_request;
use crate::core::store::{self, Records};
use crate::error::Result;

/// Find the credential answering `remote`.
///
/// # Returns
///
/// `Some(credential)` on a match, `None` if no store file exists or the
/// first existing one holds no match.
///
/// # Errors
///
/// Returns `StoreError` if the chosen file cannot be read or decrypted, and
/// `ParseError` for the first malformed line before a match.
pub fn lookup(
    remote: &Remote,
    config: &Config,
    decryptor: &dyn Decrypt,
) -> Result<Option<Credential>> {
    let Some(candidate) = config.candidates.first_existing() else {
        info!("no store file found");
        return Ok(None);
    };

    info!(path = %candidate.path().display(), "using store");

    let raw = store::load(candidate, decryptor)?;
    let found = find_match(remote, Records::new(&raw), config.scope)?;

    match &found {
        Some(credential) => info!(credential = ?credential, "credential found"),
        None => info!(%remote, "no matching credential"),
    }

    Ok(found)
}

/// Write the success response for `credential`:
///
/// ```text
/// username=<username>
/// password=<password>
///
/// ```
pub fn respond<W: Write>(writer: &mut W, credential: &Credential) -> std::io::Result<()> {
    write!(
        writer,
        "username={}\npassword={}\n\n",
        credential.username(),
        credential.password()
    )?;
    writer.flush()
}

/// Answer one `get` request read from `input`, writing to `output`.
///
/// Nothing is written to `output` unless a credential was found, so an
/// error never leaves a partial response behind.
///
/// # Errors
///
/// Returns `RequestError` for a bad request, any error from [`lookup`], and
/// `Error::Io` if the response cannot be written.
pub fn get<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
    decryptor: &dyn Decrypt,
) -> Result<()> {
    let remote = parse_request(input)?;

    if let Some(credential) = lookup(&remote, config, decryptor)? {
        respond(output, &credential)?;
        debug!("response written");
    }

    Ok(())
}
