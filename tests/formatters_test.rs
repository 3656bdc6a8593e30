// ABOUTME: Integration tests for plural forms, relative times, truncation, and tags
// ABOUTME: Exercises the presentation helpers through the readme_site re-exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use readme_site::constants::locale;
use readme_site::formatters::{
    is_date_valid, parse_timestamp, select_plural_form, truncate, PluralForms,
    RelativeTimeFormatter, Truncator, UnitForms,
};
use readme_site::validation::validate_tags;
use std::borrow::Cow;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_plural_form_table() {
    let select = |n| select_plural_form(n, "one", "few", "many");

    assert_eq!(select(1), "one");
    for n in 2..=4 {
        assert_eq!(select(n), "few", "n = {n}");
    }
    for n in 5..=20 {
        assert_eq!(select(n), "many", "n = {n}");
    }
    assert_eq!(select(0), "many");
    assert_eq!(select(21), "one");
    assert_eq!(select(22), "few");
    assert_eq!(select(25), "many");
    assert_eq!(select(101), "one");
    assert_eq!(select(111), "many");
    assert_eq!(select(112), "many");
    assert_eq!(select(1024), "few");
}

#[test]
fn test_plural_forms_from_locale_table() {
    let days = PluralForms::from_table(locale::DAY);
    assert_eq!(days.select(1), "день");
    assert_eq!(days.select(3), "дня");
    assert_eq!(days.select(11), "дней");
}

#[test]
fn test_relative_time_branches() {
    let formatter = RelativeTimeFormatter::default();
    let now = now();

    assert_eq!(
        formatter.format(now - Duration::minutes(30), now, "ago"),
        "30 минут ago"
    );
    assert_eq!(
        formatter.format(now - Duration::minutes(1), now, "ago"),
        "1 минута ago"
    );
    assert_eq!(
        formatter.format(now - Duration::hours(3), now, "ago"),
        "3 часа ago"
    );
    assert_eq!(
        formatter.format(now - Duration::days(2), now, "ago"),
        "2 дня ago"
    );
    assert_eq!(
        formatter.format(now - Duration::days(14), now, "ago"),
        "2 недели ago"
    );
    assert_eq!(
        formatter.format(now - Duration::days(40), now, "ago"),
        "1 месяц ago"
    );
    assert_eq!(
        formatter.format(now - Duration::days(400), now, locale::AGO),
        "13 месяцев назад"
    );
}

#[test]
fn test_relative_time_sub_minute_falls_back_to_absolute_date() {
    let formatter = RelativeTimeFormatter::default();
    let now = now();

    assert_eq!(
        formatter.format(now - Duration::seconds(10), now, "ago"),
        "15.06.2024 11:59"
    );
    assert_eq!(formatter.format(now, now, "ago"), "15.06.2024 12:00");
}

#[test]
fn test_relative_time_future_uses_distance() {
    let formatter = RelativeTimeFormatter::default();
    let now = now();

    assert_eq!(
        formatter.format(now + Duration::hours(5), now, "ago"),
        "5 часов ago"
    );
}

#[test]
fn test_relative_time_custom_forms() {
    let english = PluralForms::new("unit", "units", "units");
    let formatter = RelativeTimeFormatter::new(UnitForms {
        months: english.clone(),
        weeks: english.clone(),
        days: english.clone(),
        hours: english.clone(),
        minutes: english,
    });
    let now = now();

    assert_eq!(
        formatter.format(now - Duration::minutes(5), now, "ago"),
        "5 units ago"
    );
}

#[test]
fn test_stored_timestamp_round_trip_through_formatter() {
    let past = parse_timestamp("2024-06-13 12:00:00").unwrap();
    assert_eq!(
        RelativeTimeFormatter::default().format(past, now(), locale::AGO),
        "2 дня назад"
    );
    assert!(parse_timestamp("13.06.2024 12:00").is_none());
}

#[test]
fn test_truncate_cuts_after_limit_is_exceeded() {
    let custom = Truncator::with_read_more("<a>more</a>");
    assert_eq!(
        custom.truncate("The quick brown fox", 8),
        "The quick...<a>more</a>"
    );

    let default = truncate("The quick brown fox", 8);
    assert!(default.starts_with("The quick..."));
    assert!(default.ends_with(locale::READ_MORE_FRAGMENT));
}

#[test]
fn test_truncate_short_text_is_unchanged_and_unescaped() {
    let text = "Fish & <chips>";
    let result = truncate(text, 300);
    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(result, text);
    assert_eq!(truncate(&result, 300), text);
}

#[test]
fn test_truncate_counts_characters_not_bytes() {
    let custom = Truncator::with_read_more("");
    assert_eq!(custom.truncate("привет мир", 9), "привет мир");
    assert_eq!(custom.truncate("привет мир всем", 9), "привет мир...");
}

#[test]
fn test_truncate_escapes_kept_prefix() {
    let custom = Truncator::with_read_more("");
    assert_eq!(
        custom.truncate("Tom & \"Jerry\" forever", 11),
        "Tom &amp; &quot;Jerry&quot;..."
    );
}

#[test]
fn test_date_validation() {
    assert!(is_date_valid("2024-02-29"));
    assert!(!is_date_valid("2023-02-29"));
    assert!(!is_date_valid("2019-04-31"));
    assert!(!is_date_valid("10.10.2010"));
}

#[test]
fn test_tag_validation() {
    assert!(validate_tags("rust кот").is_ok());
    let err = validate_tags("rust c++").unwrap_err();
    assert!(err.starts_with("c++"));
}
