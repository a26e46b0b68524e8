// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use cx_parser::{parse, Schedule};
use similar_asserts::assert_eq;

use super::{all_months, run, tokens};

#[test]
fn every_fifteen_minutes_on_weekdays() {
    let schedule = parse("*/15, 0, 1,15, *, 1-5, /usr/bin/find").unwrap();
    assert_eq!(
        schedule,
        Schedule {
            minute: tokens(&["0", "15", "30", "45"]),
            hour: tokens(&["0"]),
            day_of_month: tokens(&["1", "15"]),
            month: all_months(),
            day_of_week: tokens(&["1", "2", "3", "4", "5"]),
            command: tokens(&["/usr/bin/find"]),
        }
    );
}

#[test]
fn every_thirty_minutes() {
    let schedule = parse("*/30, 0, 1,15, *, 1-5, /usr/bin/find").unwrap();
    assert_eq!(schedule.minute, tokens(&["0", "30"]));
}

#[test]
fn weekday_mnemonic_range() {
    let schedule = parse("*/30, 0, 1,15, *, MON-FRI, /usr/bin/find").unwrap();
    assert_eq!(schedule.day_of_week, tokens(&["0", "1", "2", "3", "4"]));
}

#[test]
fn single_weekday_mnemonic() {
    let schedule = parse("*/30, 0, 1,15, *, WED, /usr/bin/find").unwrap();
    assert_eq!(schedule.day_of_week, tokens(&["2"]));
}

#[test]
fn wraparound_weekday_range() {
    let schedule = parse("*/30, 0, 1,15, *, 4-0, /usr/bin/find").unwrap();
    assert_eq!(schedule.day_of_week, tokens(&["4", "5", "6", "0"]));
}

#[test]
fn multi_part_command() {
    let schedule = parse("*/30, 0, 1,15, *, 4-0, /usr/bin/find test file.txt").unwrap();
    assert_eq!(schedule.command, tokens(&["/usr/bin/find test file.txt"]));
}

#[test]
fn empty_command() {
    let schedule = parse("*/15, 0, 1,15, *, 1-5, ").unwrap();
    assert_eq!(schedule.command, tokens(&[""]));
}

#[test]
fn all_wildcards() {
    let schedule = parse("*, *, *, *, *, /usr/bin/find").unwrap();
    assert_eq!(
        schedule,
        Schedule {
            minute: run(0..=59),
            hour: run(0..=23),
            day_of_month: run(1..=31),
            month: all_months(),
            day_of_week: run(0..=6),
            command: tokens(&["/usr/bin/find"]),
        }
    );
}

#[test]
fn wraparound_minute_range() {
    let schedule = parse("10-1, 0, 1,15, *, 1-5, /usr/bin/find").unwrap();
    let mut expected = run(10..=59);
    expected.extend(run(0..=1));
    assert_eq!(schedule.minute, expected);
}

#[test]
fn trailing_commas_are_dropped() {
    let schedule = parse("0,, 12,, 1,15,, *,, MON,, /usr/bin/true").unwrap();
    assert_eq!(schedule.minute, tokens(&["0"]));
    assert_eq!(schedule.hour, tokens(&["12"]));
    assert_eq!(schedule.day_of_month, tokens(&["1", "15"]));
    assert_eq!(schedule.month, all_months());
    assert_eq!(schedule.day_of_week, tokens(&["0"]));
}

#[test]
fn reparsing_is_idempotent() {
    let expression = "*/20, 9-17, 1,15, 11-2, SAT-MON, /usr/bin/backup";
    let first = parse(expression).unwrap();
    let second = parse(expression).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.month, tokens(&["11", "12", "1", "2"]));
    assert_eq!(first.day_of_week, tokens(&["5", "6", "0"]));
}
