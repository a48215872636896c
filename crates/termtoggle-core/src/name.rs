//! Buffer naming convention for session identity.
//!
//! The naming convention is the core's only wire-level contract with the
//! host: a session's shell is spawned under the identity
//! `"<shell-command>;#terminal#<number>"`, so the session number stays
//! recoverable from the displayed buffer name alone. Reconciliation depends
//! on this to rebuild registry entries after a state reset, when the
//! content-type metadata may not have been reapplied.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Content-type marker declared on terminal buffers by the host.
pub const TERMINAL_BUFFER_TYPE: &str = "terminal";

/// Separator between the shell command and the session tag.
const SESSION_TAG: &str = ";#terminal#";

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r";#terminal#\d+$").unwrap())
}

/// Build the buffer name for a session's shell process.
///
/// The returned string doubles as the spawn identity handed to the host.
pub fn session_buffer_name(shell: &str, number: u32) -> String {
    format!("{shell}{SESSION_TAG}{number}")
}

/// Check whether a buffer name follows the session naming convention.
///
/// This is the reconciliation predicate: a superset of the content-type
/// check, matching by name only.
pub fn is_session_buffer_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

/// Recover the session number from a buffer name.
///
/// The number is the integer after the final `#`. Parsing is strict: any
/// name that does not end in `#<positive integer>` yields
/// [`Error::NameFormat`] rather than a silent absence, so reconciliation
/// failures stay observable.
pub fn parse_session_number(name: &str) -> Result<u32> {
    let (_, tail) = name
        .rsplit_once('#')
        .ok_or_else(|| Error::NameFormat(name.to_string()))?;
    match tail.parse::<u32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(Error::NameFormat(name.to_string())),
    }
}
