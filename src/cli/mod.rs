//! Command-line interface.
//!
//! Git runs the helper as `git-credential-authinfo <operation>` with the
//! request on stdin. Only `get` does anything; this helper never writes
//! store files, so `store`, `erase` and operations git may add later are
//! read and ignored.

pub mod get;
pub mod output;

use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Read};
use tracing::{debug, error};

use crate::core::config::{Config, Overrides};
use crate::core::{constants, logging};
use crate::error::{Error, Result};

/// git-credential-authinfo - read-only git credential helper for ~/.authinfo and ~/.netrc.
#[derive(Parser, Debug)]
#[command(
    name = "git-credential-authinfo",
    about = "Read-only git credential helper for ~/.authinfo and ~/.netrc (plain or gpg)",
    version,
    after_help = "Store lines: machine <host> login <username>^git password <password>"
)]
pub struct Cli {
    /// Credential operation requested by git
    #[arg(default_value = "get")]
    pub operation: String,

    /// Write diagnostics to ~/authinfo.log (same as LOGGING=1)
    #[arg(short, long)]
    pub verbose: bool,

    /// Program used to decrypt .gpg store files
    #[arg(long, env = constants::GPG_PROGRAM_ENV, value_name = "PROGRAM")]
    pub gpg_program: Option<OsString>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            verbose: self.verbose,
            gpg_program: self.gpg_program.clone(),
        }
    }
}

/// Run the requested operation.
///
/// # Errors
///
/// Returns error if configuration, logging setup or the operation fails.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(cli.overrides())?;
    logging::init(&config)?;
    debug!(
        log_file = %config.log_file.display(),
        gpg_program = ?config.gpg_program,
        "config loaded"
    );

    let result = match cli.operation.as_str() {
        "get" => get::execute(&config),
        other => {
            debug!(operation = other, "ignoring operation");
            io::stdin()
                .lock()
                .read_to_end(&mut Vec::new())
                .map(|_| ())
                .map_err(Error::from)
        }
    };

    if let Err(e) = &result {
        error!(error = %e, operation = %cli.operation, "operation failed");
    }
    result
}
