// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field expansion for the numeric cron grammar.
//!
//! A field is checked against a fixed character class, then matched against
//! the grammar forms in precedence order: wildcard, step, range, list,
//! single value. The first form that applies decides the result.

use crate::domain::{tokens, Domain, FieldKind};
use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// How list elements and bare single values are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPolicy {
    /// Return list elements and single values verbatim.
    #[default]
    Literal,
    /// Require every list element and single value to be an integer inside
    /// the field's domain.
    Validated,
}

/// Why a field was rejected. Only surfaces in logs.
pub(crate) type Rejection = &'static str;

/// Expand a numeric field into the ordered list of values it denotes.
///
/// Uses [`ListPolicy::Literal`]: list elements and single values are returned
/// as written.
///
/// # Examples
///
/// ```
/// use cx_parser::{expand, Domain, FieldKind};
///
/// let values = expand("*/20", Domain::MINUTE, FieldKind::Minute)?;
/// assert_eq!(values, ["0", "20", "40"]);
///
/// let values = expand("5-1", Domain::DAY_OF_WEEK, FieldKind::DayOfWeek)?;
/// assert_eq!(values, ["5", "6", "0", "1"]);
/// # Ok::<(), cx_parser::ParseError>(())
/// ```
pub fn expand(raw: &str, domain: Domain, field: FieldKind) -> Result<Vec<String>, ParseError> {
    expand_with_policy(raw, domain, field, ListPolicy::Literal)
}

/// Expand a numeric field with an explicit [`ListPolicy`].
pub fn expand_with_policy(
    raw: &str,
    domain: Domain,
    field: FieldKind,
    policy: ListPolicy,
) -> Result<Vec<String>, ParseError> {
    let value = strip_trailing_comma(raw);
    let result = if value.is_empty() {
        Err("empty field")
    } else if !value.chars().all(is_numeric_field_char) {
        Err("unexpected character")
    } else {
        expand_value(value, domain, policy)
    };

    result
        .inspect(|values| {
            tracing::trace!(field = %field, raw, count = values.len(), "expanded field");
        })
        .map_err(|reason| reject(field, raw, reason))
}

/// Match an already-checked field against the grammar forms.
fn expand_value(value: &str, domain: Domain, policy: ListPolicy) -> Result<Vec<String>, Rejection> {
    if value == "*" {
        Ok(domain.values())
    } else if value.contains('/') {
        expand_step(value, domain)
    } else if value.contains('-') {
        expand_range(value, domain)
    } else if value.contains(',') {
        expand_list(value, domain, policy)
    } else {
        expand_single(value, domain, policy)
    }
}

/// Drop a single trailing comma.
pub(crate) fn strip_trailing_comma(raw: &str) -> &str {
    raw.strip_suffix(',').unwrap_or(raw)
}

pub(crate) fn reject(field: FieldKind, raw: &str, reason: Rejection) -> ParseError {
    tracing::debug!(field = %field, raw, reason, "rejected field");
    ParseError::Field(field)
}

fn is_numeric_field_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ',' | '*' | '-' | '/')
}

fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// `A/N` or `*/N`: every N-th value of the whole domain.
///
/// The left-hand side does not narrow the domain; positions count from the
/// domain's first value.
fn expand_step(value: &str, domain: Domain) -> Result<Vec<String>, Rejection> {
    let Some((_, divisor)) = value.split_once('/') else {
        return Err("missing step separator");
    };
    if divisor.contains('/') {
        return Err("more than one step separator");
    }
    let step = parse_number(divisor).ok_or("step is not a number")?;
    if step == 0 {
        return Err("step must be positive");
    }
    Ok(domain
        .values()
        .into_iter()
        .step_by(step as usize)
        .collect())
}

/// `A-B`: ascending when `A <= B`, otherwise wraps past the domain's end.
///
/// The start may sit on the domain's exclusive end and a wrapping end may sit
/// below the domain's minimum; either one just contributes an empty run.
pub(crate) fn expand_range(value: &str, domain: Domain) -> Result<Vec<String>, Rejection> {
    let Some((low, high)) = value.split_once('-') else {
        return Err("missing range separator");
    };
    if high.contains('-') {
        return Err("more than one range separator");
    }
    let low = parse_number(low).ok_or("range start is not a number")?;
    let high = parse_number(high).ok_or("range end is not a number")?;
    if low < domain.min || low > domain.max || high >= domain.max {
        return Err("range outside domain");
    }

    if low <= high {
        Ok(tokens(low..=high))
    } else {
        Ok(tokens((low..domain.max).chain(domain.min..=high)))
    }
}

fn expand_list(value: &str, domain: Domain, policy: ListPolicy) -> Result<Vec<String>, Rejection> {
    value
        .split(',')
        .map(|element| checked_token(element, domain, policy))
        .collect()
}

fn expand_single(
    value: &str,
    domain: Domain,
    policy: ListPolicy,
) -> Result<Vec<String>, Rejection> {
    Ok(vec![checked_token(value, domain, policy)?])
}

fn checked_token(token: &str, domain: Domain, policy: ListPolicy) -> Result<String, Rejection> {
    match policy {
        ListPolicy::Literal => Ok(token.to_string()),
        ListPolicy::Validated => match parse_number(token) {
            Some(n) if domain.contains(n) => Ok(n.to_string()),
            Some(_) => Err("value outside domain"),
            None => Err("value is not a number"),
        },
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
