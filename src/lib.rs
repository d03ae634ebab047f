//! git-credential-authinfo - a read-only git credential helper backed by
//! `~/.authinfo` and `~/.netrc`, plaintext or gpg-encrypted.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # Answer a credential request
//! │   └── output        # Terminal error output
//! └── core/             # Core library components
//!     ├── config        # Runtime configuration
//!     ├── constants     # Store files, scope, env vars
//!     ├── domain/       # Remote and Credential
//!     ├── request       # Credential-protocol request parser
//!     ├── store/        # Store candidates, loading, line grammar
//!     ├── cipher/       # Decryption backends (gpg)
//!     ├── matcher       # First-match selection
//!     ├── lookup        # Orchestration and response
//!     └── logging       # Opt-in file diagnostics
//! ```
//!
//! # Store format
//!
//! ```text
//! machine <host> login <username>^<application> password <password>
//! ```
//!
//! Only credentials whose application is `git` are eligible.

pub mod cli;
pub mod core;
pub mod error;
