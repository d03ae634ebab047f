//! Test fixtures and constants.

/// The standard request git sends for an https remote.
pub const REQUEST: &str = "protocol=https\nhost=example.com\nusername=alice\n\n";

/// The same request preceded by capability negotiation keys.
pub const REQUEST_WITH_EXTENSIONS: &str =
    "capability[]=authtype\nauthtype=basic\nstate[]=x\nprotocol=https\nhost=example.com\nusername=alice\n\n";

/// A store line answering [`REQUEST`].
pub const ALICE_LINE: &str = "machine example.com login alice^git password s3cret\n";

/// Expected response for [`ALICE_LINE`].
pub const ALICE_RESPONSE: &str = "username=alice\npassword=s3cret\n\n";

/// A store with several hosts and scopes; only one line answers [`REQUEST`].
pub const MIXED_STORE: &str = "\
machine github.com login alice^git password gh-token
machine example.com login alice^smtp password mail-pass
machine example.com login bob^git password bob-pass
machine example.com login alice^git password s3cret
machine example.com login alice^git password shadowed
";

/// A five-token line (the `password` keyword is missing).
pub const FIVE_TOKEN_LINE: &str = "machine example.com login alice^git s3cret\n";

/// A six-token line whose login lacks the `^application` part.
pub const NO_APPLICATION_LINE: &str = "machine example.com login alice password s3cret\n";
