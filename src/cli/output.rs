//! Terminal output for failures.
//!
//! stdout belongs to the credential protocol, so everything here goes to
//! stderr, which git shows to the user. Colors respect NO_COLOR.

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ line 3: expected 6 space-separated tokens, found 5`
pub fn error(msg: &str) {
    eprintln!("{}", format_error(msg, colors_enabled()));
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check that gpg can decrypt the file`
pub fn hint(msg: &str) {
    eprintln!("{}", format_hint(msg, colors_enabled()));
}

fn format_error(msg: &str, color: bool) -> String {
    if color {
        format!("{} {}", style("✗").red().force_styling(true), msg)
    } else {
        format!("✗ {}", msg)
    }
}

fn format_hint(msg: &str, color: bool) -> String {
    if color {
        format!(
            "{} {}",
            style("→").cyan().force_styling(true),
            style(msg).cyan().force_styling(true)
        )
    } else {
        format!("→ {}", msg)
    }
}
