//! Remote type.
//!
//! The query decoded from a credential-protocol request.

use std::fmt;

/// A credential request: which remote the caller wants credentials for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Remote {
    protocol: String,
    host: String,
    username: String,
}

impl Remote {
    /// Create a remote from its protocol, host and username.
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            username: username.into(),
        }
    }

    /// Protocol as sent by the caller (e.g. `https`). Not used for matching.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}@{}", self.protocol, self.username, self.host)
    }
}
