//! `get`: answer a credential request from stdin on stdout.

use std::io;

use crate::core::cipher::Gpg;
use crate::core::config::Config;
use crate::core::lookup;
use crate::error::Result;

/// Read the request from stdin and print the matching credential, if any.
///
/// # Errors
///
/// Returns error if the request is malformed or the lookup fails.
pub fn execute(config: &Config) -> Result<()> {
    let decryptor = Gpg::new(config.gpg_program.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();

    lookup::get(stdin.lock(), &mut stdout.lock(), config, &decryptor)
}
