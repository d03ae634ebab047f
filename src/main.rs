//! git-credential-authinfo - read-only git credential helper.

use clap::Parser;

use authinfo::cli::output;
use authinfo::cli::{execute, Cli};
use authinfo::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Parse(_) => {
                Some("each line must read: machine <host> login <username>^git password <password>")
            }
            Error::Store(StoreError::DecryptionFailed { .. }) => {
                Some("check that `gpg --decrypt` works on the file, or set --gpg-program")
            }
            Error::Request(_) => {
                Some("this program is meant to be run by git as a credential helper")
            }
            Error::Config(ConfigError::NoHomeDir) => Some("set HOME"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
