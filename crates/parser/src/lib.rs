// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Cron expression expander.
//!
//! This crate turns a single cron line (five time fields plus a command) into
//! the explicit list of values each field denotes, or rejects it with an error
//! naming the first field that failed.
//!
//! # Quick Start
//!
//! ```
//! use cx_parser::parse;
//!
//! let schedule = parse("*/15, 0, 1,15, *, 1-5, /usr/bin/find")?;
//! assert_eq!(schedule.minute, ["0", "15", "30", "45"]);
//! assert_eq!(schedule.day_of_week, ["1", "2", "3", "4", "5"]);
//! # Ok::<(), cx_parser::ParseError>(())
//! ```
//!
//! # Field Grammar
//!
//! - **Wildcard**: `*` expands to every value of the field's domain
//! - **Step**: `*/N` keeps every N-th value of the domain
//! - **Range**: `A-B`, wrapping around the domain when `A > B`
//! - **List**: `A,B,C` returned as literal tokens
//! - **Mnemonics**: `MON`..`SUN` and `MON-FRI` in the day-of-week field
//!
//! # Grammars
//!
//! Fields are separated by `", "` by default. [`Separator::Space`] selects the
//! legacy space-separated form, where everything after the fifth field is the
//! command. See [`ParserConfig`].

mod command;
mod domain;
mod error;
mod field;
mod schedule;
mod weekday;

pub use command::validate_command;
pub use domain::{Domain, FieldKind};
pub use error::{ParseError, WeekdayError};
pub use field::{expand, expand_with_policy, ListPolicy};
pub use schedule::{parse, CronParser, ParserConfig, Schedule, Separator};
pub use weekday::{expand_day_of_week, resolve_weekday};
