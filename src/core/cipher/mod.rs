//! Store decryption.
//!
//! Encrypted store files are never parsed directly: a [`Decrypt`]
//! implementation turns the file at a path into plaintext bytes first.
//!
//! ## Backends
//!
//! - **gpg**: Default. Runs the `gpg` CLI, which reaches the user's keyring
//!   and agent through the inherited environment.
//! - **closures**: Any `Fn(&Path) -> Result<Zeroizing<Vec<u8>>, StoreError>`
//!   is a decryptor, which keeps lookups testable without spawning anything.

use std::path::Path;
use zeroize::Zeroizing;

use crate::error::StoreError;

mod gpg;

pub use gpg::Gpg;

/// Decryption backend trait.
pub trait Decrypt {
    /// Decrypt the file at `path` and return its plaintext.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DecryptionFailed` if the backend cannot produce
    /// the complete plaintext. Partial output is never returned.
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<Vec<u8>>, StoreError>;
}

impl<F> Decrypt for F
where
    F: Fn(&Path) -> Result<Zeroizing<Vec<u8>>, StoreError>,
{
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<Vec<u8>>, StoreError> {
        self(path)
    }
}
