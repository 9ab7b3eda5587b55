//! Shell-like argument splitting.
//!
//! Whitespace separates tokens; a quoted run is one token with the quotes
//! stripped. Malformed quoting is reported as unparseable input, never
//! propagated as a crash.

use crate::error::{ConsoleError, Result};

/// Split an argument string into tokens.
///
/// An unterminated quote yields the generic unparseable-syntax error,
/// carrying the line's first token.
pub fn split(args: &str) -> Result<Vec<String>> {
    shlex::split(args).ok_or_else(|| ConsoleError::UnknownSyntax(first_token(args).to_string()))
}

pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}
