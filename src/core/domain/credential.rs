//! Credential type.
//!
//! One record of a store file. The password is wiped from memory on drop
//! and never appears in `Debug` output.

use std::fmt;
use zeroize::Zeroizing;

use super::Remote;

/// A stored credential scoped to an application.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    host: String,
    username: String,
    application: String,
    password: Zeroizing<String>,
}

impl Credential {
    /// Create a credential from its four fields.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        application: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            application: application.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Application scope this credential is meant for (e.g. `git`).
    pub fn application(&self) -> &str {
        &self.application
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether this credential answers `remote` for the given scope.
    ///
    /// Exact, case-sensitive comparison of host and username. The remote's
    /// protocol plays no part.
    pub fn matches(&self, remote: &Remote, scope: &str) -> bool {
        self.host == remote.host()
            && self.username == remote.username()
            && self.application == scope
    }

    /// Render as a store line:
    /// `machine <host> login <username>^<application> password <password>`.
    pub fn to_line(&self) -> String {
        format!(
            "machine {} login {}^{} password {}",
            self.host,
            self.username,
            self.application,
            self.password.as_str()
        )
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("application", &self.application)
            .field("password", &"<redacted>")
            .finish()
    }
}
