// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Day-of-week field: weekday mnemonics on top of the numeric grammar.

use crate::domain::{Domain, FieldKind};
use crate::error::{ParseError, WeekdayError};
use crate::field::{self, expand_with_policy, reject, strip_trailing_comma, ListPolicy};

/// Mnemonics in numeric order, `MON` = 0.
const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Resolve a three-letter weekday name to its numeric token.
///
/// Matching is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use cx_parser::{resolve_weekday, WeekdayError};
///
/// assert_eq!(resolve_weekday("MON").as_deref(), Ok("0"));
/// assert_eq!(resolve_weekday("SUN").as_deref(), Ok("6"));
/// assert_eq!(resolve_weekday("mon"), Err(WeekdayError::UnknownDay));
/// ```
pub fn resolve_weekday(token: &str) -> Result<String, WeekdayError> {
    WEEKDAYS
        .iter()
        .position(|day| *day == token)
        .map(|index| index.to_string())
        .ok_or(WeekdayError::UnknownDay)
}

/// Expand the day-of-week field.
///
/// A field made only of letters and hyphens is read as a mnemonic (`WED`) or
/// a mnemonic range (`MON-FRI`, wrapping like a numeric range). Anything else
/// goes through the numeric grammar of [`expand`](crate::expand).
pub fn expand_day_of_week(raw: &str, domain: Domain) -> Result<Vec<String>, ParseError> {
    expand_day_of_week_with_policy(raw, domain, ListPolicy::Literal)
}

pub(crate) fn expand_day_of_week_with_policy(
    raw: &str,
    domain: Domain,
    policy: ListPolicy,
) -> Result<Vec<String>, ParseError> {
    const FIELD: FieldKind = FieldKind::DayOfWeek;

    let value = strip_trailing_comma(raw);
    if value.is_empty() {
        return Err(reject(FIELD, raw, "empty field"));
    }
    if !value.chars().all(is_day_of_week_char) {
        return Err(reject(FIELD, raw, "unexpected character"));
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        return expand_with_policy(raw, domain, FIELD, policy);
    }

    let values = match value.split_once('-') {
        Some((first, last)) => {
            if last.contains('-') {
                return Err(reject(FIELD, raw, "more than one range separator"));
            }
            let first = resolve(first, raw)?;
            let last = resolve(last, raw)?;
            field::expand_range(&format!("{first}-{last}"), domain)
                .map_err(|reason| reject(FIELD, raw, reason))?
        }
        None => vec![resolve(value, raw)?],
    };
    tracing::trace!(field = %FIELD, raw, count = values.len(), "expanded weekday mnemonics");
    Ok(values)
}

fn resolve(token: &str, raw: &str) -> Result<String, ParseError> {
    resolve_weekday(token).map_err(|_| reject(FieldKind::DayOfWeek, raw, "unknown weekday"))
}

fn is_day_of_week_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ',' | '*' | '-' | '/')
}

#[cfg(test)]
#[path = "weekday_tests.rs"]
mod tests;
