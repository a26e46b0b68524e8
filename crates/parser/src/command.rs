// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Character-set gate for the command part of an expression.

use crate::error::ParseError;

/// Validate the command tokens, returning them unchanged.
///
/// The command is not interpreted. The sequence must be non-empty and its
/// first token may only contain ASCII letters, digits, spaces, and
/// `,` `-` `/` `.`. Later tokens are passed through unchecked.
///
/// # Examples
///
/// ```
/// use cx_parser::{validate_command, ParseError};
///
/// let tokens = vec!["/usr/bin/find test file.txt".to_string()];
/// assert_eq!(validate_command(tokens.clone()), Ok(tokens));
///
/// assert_eq!(validate_command(vec!["*".to_string()]), Err(ParseError::Command));
/// assert_eq!(validate_command(Vec::new()), Err(ParseError::Command));
///
/// let tokens = vec!["echo".to_string(), "$HOME".to_string()];
/// assert_eq!(validate_command(tokens.clone()), Ok(tokens));
/// ```
pub fn validate_command(tokens: Vec<String>) -> Result<Vec<String>, ParseError> {
    let Some(first) = tokens.first() else {
        tracing::debug!("rejected command: missing");
        return Err(ParseError::Command);
    };
    if !first.chars().all(is_command_char) {
        tracing::debug!(token = %first, "rejected command: unexpected character");
        return Err(ParseError::Command);
    }
    Ok(tokens)
}

fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '-' | '/' | '.')
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
