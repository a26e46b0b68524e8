// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field identities and their numeric domains.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open interval `[min, max)` of legal values for a field.
///
/// # Examples
///
/// ```
/// use cx_parser::Domain;
///
/// assert_eq!(Domain::HOUR.len(), 24);
/// assert!(Domain::MONTH.contains(12));
/// assert!(!Domain::MONTH.contains(13));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    /// Smallest legal value (inclusive)
    pub min: u32,
    /// Upper bound (exclusive)
    pub max: u32,
}

impl Domain {
    pub const MINUTE: Domain = Domain::new(0, 60);
    pub const HOUR: Domain = Domain::new(0, 24);
    pub const DAY_OF_MONTH: Domain = Domain::new(1, 32);
    pub const MONTH: Domain = Domain::new(1, 13);
    pub const DAY_OF_WEEK: Domain = Domain::new(0, 7);

    #[inline]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Number of values in the domain.
    #[inline]
    pub fn len(&self) -> usize {
        self.max.saturating_sub(self.min) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max <= self.min
    }

    /// Returns true if `min <= value < max`.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value < self.max
    }

    /// Every value of the domain, ascending, as string tokens.
    pub fn values(&self) -> Vec<String> {
        tokens(self.min..self.max)
    }
}

/// Render integers as base-10 string tokens.
pub(crate) fn tokens(values: impl IntoIterator<Item = u32>) -> Vec<String> {
    values.into_iter().map(|v| v.to_string()).collect()
}

/// One of the five time fields of a cron expression, in parse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All time fields in the order they appear in an expression.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Human-readable name, used in error messages and rendered output.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day of month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day of week",
        }
    }

    pub fn domain(self) -> Domain {
        match self {
            FieldKind::Minute => Domain::MINUTE,
            FieldKind::Hour => Domain::HOUR,
            FieldKind::DayOfMonth => Domain::DAY_OF_MONTH,
            FieldKind::Month => Domain::MONTH,
            FieldKind::DayOfWeek => Domain::DAY_OF_WEEK,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod tests;
