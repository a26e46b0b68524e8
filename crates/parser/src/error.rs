// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::domain::FieldKind;
use thiserror::Error;

/// Cron expression errors.
///
/// At most one error is produced per parse: fields are checked left to right
/// and parsing stops at the first one that fails. Errors identify the field
/// only, never its content.
///
/// # Examples
///
/// ```
/// use cx_parser::{parse, FieldKind, ParseError};
///
/// let result = parse("*/15, 0, 1,15, *, 1-5");
/// assert!(matches!(result, Err(ParseError::FieldCount { found: 5 })));
///
/// let result = parse("*/15, 0, 0-15, *, 1-5, /usr/bin/find");
/// assert_eq!(result, Err(ParseError::Field(FieldKind::DayOfMonth)));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The expression did not split into the expected number of fields.
    #[error("Invalid number of cron elements")]
    FieldCount {
        /// Number of fields the expression split into.
        found: usize,
    },

    /// A time field is malformed or out of its domain.
    ///
    /// Malformed syntax and out-of-domain values are not distinguished.
    #[error("Invalid {0} definition")]
    Field(FieldKind),

    /// The command is empty or contains a disallowed character.
    #[error("Invalid command definition")]
    Command,
}

impl ParseError {
    /// The time field that failed, if this is a field error.
    pub fn field(&self) -> Option<FieldKind> {
        match self {
            ParseError::Field(kind) => Some(*kind),
            ParseError::FieldCount { .. } | ParseError::Command => None,
        }
    }
}

impl From<FieldKind> for ParseError {
    fn from(kind: FieldKind) -> Self {
        ParseError::Field(kind)
    }
}

/// Weekday mnemonic resolution errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeekdayError {
    #[error("Invalid day string")]
    UnknownDay,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
