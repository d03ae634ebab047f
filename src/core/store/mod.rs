//! Credential store files.
//!
//! A store is one file in the user's home directory, plaintext or
//! gpg-encrypted, holding one credential per line (see [`records`]).
//! [`Candidates`] lists the files to consider in priority order; [`load`]
//! turns one of them into raw bytes ready for [`Records`].

use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::Decrypt;
use crate::core::constants::{ENCRYPTED_EXTENSION, STORE_FILES};
use crate::error::StoreError;

pub mod records;

pub use records::{parse_line, Records};

/// One store file the lookup may consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    path: PathBuf,
    encrypted: bool,
}

impl Candidate {
    /// A candidate at `path`; encrypted when the extension is `gpg`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let encrypted = path
            .extension()
            .is_some_and(|ext| ext == ENCRYPTED_EXTENSION);
        Self { path, encrypted }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// Whether the candidate exists as a regular file (or a link to one).
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Ordered list of candidate store files, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates(Vec<Candidate>);

impl Candidates {
    /// Candidates in the given order.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self(candidates)
    }

    /// The standard store files under `home`:
    /// `.authinfo.gpg`, `.authinfo`, `.netrc.gpg`, `.netrc`.
    pub fn in_home(home: &Path) -> Self {
        Self(
            STORE_FILES
                .iter()
                .map(|name| Candidate::new(home.join(name)))
                .collect(),
        )
    }

    /// The highest-priority candidate that exists on disk.
    pub fn first_existing(&self) -> Option<&Candidate> {
        self.0.iter().find(|candidate| candidate.exists())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read the raw contents of a candidate, decrypting it if needed.
///
/// # Errors
///
/// Returns `StoreError::Unreadable` if a plaintext file cannot be read, or
/// whatever `StoreError::DecryptionFailed` the decryptor reports.
pub fn load(
    candidate: &Candidate,
    decryptor: &dyn Decrypt,
) -> Result<Zeroizing<Vec<u8>>, StoreError> {
    debug!(
        path = %candidate.path().display(),
        encrypted = candidate.is_encrypted(),
        "loading store"
    );

    let raw = if candidate.is_encrypted() {
        decryptor.decrypt(candidate.path())?
    } else {
        std::fs::read(candidate.path())
            .map(Zeroizing::new)
            .map_err(|source| StoreError::Unreadable {
                path: candidate.path().to_path_buf(),
                source,
            })?
    };

    debug!(bytes = raw.len(), "store loaded");
    Ok(raw)
}
