// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-expression parsing.
//!
//! Splits an expression into its six fields, expands the five time fields in
//! order (stopping at the first failure), and validates the command.

use crate::command::validate_command;
use crate::domain::FieldKind;
use crate::error::ParseError;
use crate::field::{expand_with_policy, ListPolicy};
use crate::weekday::expand_day_of_week_with_policy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fields in an expression: five time fields plus the command.
const FIELD_COUNT: usize = 6;

/// Separator between the fields of an expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Separator {
    /// `", "`. Exactly six fields; the command is the sixth and may contain
    /// spaces.
    #[default]
    CommaSpace,
    /// `" "`. Legacy form: at least six fields, everything from the sixth on
    /// is the command.
    Space,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::CommaSpace => ", ",
            Separator::Space => " ",
        }
    }

    /// Split an expression into the five time fields and the command tokens.
    fn split(self, expression: &str) -> Result<([&str; 5], Vec<String>), ParseError> {
        let mut fields: Vec<&str> = expression.split(self.as_str()).collect();
        let found = fields.len();
        let valid = match self {
            Separator::CommaSpace => found == FIELD_COUNT,
            Separator::Space => found >= FIELD_COUNT,
        };
        if !valid {
            tracing::debug!(found, separator = %self, "wrong number of fields");
            return Err(ParseError::FieldCount { found });
        }
        let command = fields
            .split_off(FIELD_COUNT - 1)
            .into_iter()
            .map(str::to_string)
            .collect();
        let time = fields
            .try_into()
            .map_err(|_| ParseError::FieldCount { found })?;
        Ok((time, command))
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::CommaSpace => f.write_str("comma-space"),
            Separator::Space => f.write_str("space"),
        }
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comma-space" => Ok(Separator::CommaSpace),
            "space" => Ok(Separator::Space),
            other => Err(format!(
                "unknown separator '{other}', expected 'comma-space' or 'space'"
            )),
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field separator (and with it, how the command is delimited).
    pub separator: Separator,
    /// How list elements and single values are checked.
    pub list_policy: ListPolicy,
}

/// The fully expanded form of a cron expression.
///
/// Time fields hold numeric string tokens. `command` holds the command text,
/// one token in the comma-space grammar and possibly several in the legacy
/// space grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub minute: Vec<String>,
    pub hour: Vec<String>,
    pub day_of_month: Vec<String>,
    pub month: Vec<String>,
    pub day_of_week: Vec<String>,
    pub command: Vec<String>,
}

impl Schedule {
    /// Expanded values of a time field.
    pub fn field(&self, kind: FieldKind) -> &[String] {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }

    /// `(label, tokens)` for every field, in expression order, command last.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        FieldKind::ALL
            .into_iter()
            .map(move |kind| (kind.label(), self.field(kind)))
            .chain(std::iter::once(("command", self.command.as_slice())))
    }
}

/// Cron expression parser with an explicit [`ParserConfig`].
///
/// # Examples
///
/// ```
/// use cx_parser::{CronParser, ParserConfig, Separator};
///
/// let parser = CronParser::new(ParserConfig {
///     separator: Separator::Space,
///     ..ParserConfig::default()
/// });
/// let schedule = parser.parse("0 9 * * MON-FRI /usr/bin/backup --full")?;
/// assert_eq!(schedule.day_of_week, ["0", "1", "2", "3", "4"]);
/// assert_eq!(schedule.command, ["/usr/bin/backup", "--full"]);
/// # Ok::<(), cx_parser::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CronParser {
    config: ParserConfig,
}

impl CronParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an expression into its [`Schedule`].
    ///
    /// Returns the error for the first field (left to right) that fails.
    pub fn parse(&self, expression: &str) -> Result<Schedule, ParseError> {
        let ([minute, hour, day_of_month, month, day_of_week], command) =
            self.config.separator.split(expression)?;

        // Initializers run in order, so the first failing field wins
        let schedule = Schedule {
            minute: self.expand(FieldKind::Minute, minute)?,
            hour: self.expand(FieldKind::Hour, hour)?,
            day_of_month: self.expand(FieldKind::DayOfMonth, day_of_month)?,
            month: self.expand(FieldKind::Month, month)?,
            day_of_week: self.expand(FieldKind::DayOfWeek, day_of_week)?,
            command: validate_command(command)?,
        };
        tracing::debug!(expression, "parsed cron expression");
        Ok(schedule)
    }

    fn expand(&self, kind: FieldKind, raw: &str) -> Result<Vec<String>, ParseError> {
        let policy = self.config.list_policy;
        match kind {
            FieldKind::DayOfWeek => expand_day_of_week_with_policy(raw, kind.domain(), policy),
            _ => expand_with_policy(raw, kind.domain(), kind, policy),
        }
    }
}

/// Parse an expression with the default configuration (comma-space
/// separator, literal lists).
pub fn parse(expression: &str) -> Result<Schedule, ParseError> {
    CronParser::default().parse(expression)
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
