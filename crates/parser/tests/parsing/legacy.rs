// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use cx_parser::{FieldKind, ParseError};
use similar_asserts::assert_eq;

use super::{all_months, parse_legacy, tokens};

#[test]
fn space_separated_expression() {
    let schedule = parse_legacy("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
    assert_eq!(schedule.minute, tokens(&["0", "15", "30", "45"]));
    assert_eq!(schedule.hour, tokens(&["0"]));
    assert_eq!(schedule.day_of_month, tokens(&["1", "15"]));
    assert_eq!(schedule.month, all_months());
    assert_eq!(schedule.day_of_week, tokens(&["1", "2", "3", "4", "5"]));
    assert_eq!(schedule.command, tokens(&["/usr/bin/find"]));
}

#[test]
fn command_arguments_become_tokens() {
    let schedule = parse_legacy("0 0 * * SUN /usr/bin/find . -name core").unwrap();
    assert_eq!(schedule.day_of_week, tokens(&["6"]));
    assert_eq!(schedule.command, tokens(&["/usr/bin/find", ".", "-name", "core"]));
}

#[test]
fn later_command_tokens_are_unchecked() {
    let schedule = parse_legacy("0 0 * * * echo $HOME").unwrap();
    assert_eq!(schedule.command, tokens(&["echo", "$HOME"]));
}

#[test]
fn comma_space_expression_also_splits_on_spaces() {
    // Splitting on " " leaves a trailing comma on each field, which is stripped
    let schedule = parse_legacy("*/15, 0, 1,15, *, 1-5, /usr/bin/find").unwrap();
    assert_eq!(schedule.minute, tokens(&["0", "15", "30", "45"]));
    assert_eq!(schedule.day_of_week, tokens(&["1", "2", "3", "4", "5"]));
}

#[test]
fn legacy_too_few_fields() {
    assert_eq!(
        parse_legacy("* * * * *"),
        Err(ParseError::FieldCount { found: 5 })
    );
}

#[test]
fn legacy_field_errors() {
    assert_eq!(
        parse_legacy("* * 32 * * ls").unwrap().day_of_month,
        tokens(&["32"])
    );
    assert_eq!(
        parse_legacy("* * 1-32 * * ls"),
        Err(ParseError::Field(FieldKind::DayOfMonth))
    );
}
