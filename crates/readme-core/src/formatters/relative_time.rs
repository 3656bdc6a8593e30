// ABOUTME: Relative time formatting for stored timestamps ("3 дня назад")
// ABOUTME: Picks exactly one granularity (months, weeks, days, hours, minutes) per phrase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use super::plural::PluralForms;
use crate::constants::{formats, limits, locale};
use chrono::{Datelike, Local, NaiveDateTime};
use tracing::trace;

/// Word forms for every unit the formatter can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitForms {
    /// Month forms
    pub months: PluralForms,
    /// Week forms
    pub weeks: PluralForms,
    /// Day forms
    pub days: PluralForms,
    /// Hour forms
    pub hours: PluralForms,
    /// Minute forms
    pub minutes: PluralForms,
}

impl UnitForms {
    /// Russian word forms (the site's default locale)
    #[must_use]
    pub const fn russian() -> Self {
        Self {
            months: PluralForms::from_table(locale::MONTH),
            weeks: PluralForms::from_table(locale::WEEK),
            days: PluralForms::from_table(locale::DAY),
            hours: PluralForms::from_table(locale::HOUR),
            minutes: PluralForms::from_table(locale::MINUTE),
        }
    }
}

impl Default for UnitForms {
    fn default() -> Self {
        Self::russian()
    }
}

/// Turns the distance between two timestamps into a short phrase.
///
/// Exactly one granularity is reported, checked in this order:
///
/// | elapsed                  | phrase                     |
/// |--------------------------|----------------------------|
/// | 5 weeks or more          | `{months} {month} {words}` |
/// | 1 to 5 weeks             | `{weeks} {week} {words}`   |
/// | 1 to 7 days              | `{days} {day} {words}`     |
/// | 1 to 24 hours            | `{hours} {hour} {words}`   |
/// | 1 to 60 minutes          | `{minutes} {minute} {words}` |
/// | under a minute           | `dd.mm.YYYY HH:MM` of the past timestamp |
///
/// Sub-minute distances fall through to the absolute date; there
/// is no seconds granularity.
#[derive(Debug, Clone, Default)]
pub struct RelativeTimeFormatter {
    forms: UnitForms,
}

impl RelativeTimeFormatter {
    /// Create a formatter for the given locale forms
    #[must_use]
    pub const fn new(forms: UnitForms) -> Self {
        Self { forms }
    }

    /// Word forms in use
    #[must_use]
    pub const fn forms(&self) -> &UnitForms {
        &self.forms
    }

    /// Describe how long before `now` the timestamp `past` lies.
    ///
    /// A `past` that is actually later than `now` is measured by its absolute
    /// distance.
    #[must_use]
    pub fn format(&self, past: NaiveDateTime, now: NaiveDateTime, words: &str) -> String {
        let (earlier, later) = if past <= now { (past, now) } else { (now, past) };
        let elapsed = later - earlier;
        let days = elapsed.num_days();
        let weeks = days / limits::DAYS_PER_WEEK;

        if weeks >= limits::WEEKS_BEFORE_MONTHS {
            let months = whole_months_between(earlier, later);
            return phrase(months, &self.forms.months, words);
        }
        if weeks >= 1 {
            return phrase(weeks, &self.forms.weeks, words);
        }
        if days >= 1 {
            return phrase(days, &self.forms.days, words);
        }

        let hours = elapsed.num_hours();
        if hours >= 1 {
            return phrase(hours, &self.forms.hours, words);
        }

        let minutes = elapsed.num_minutes();
        if minutes > 0 {
            return phrase(minutes, &self.forms.minutes, words);
        }

        trace!(
            elapsed_secs = elapsed.num_seconds(),
            "No relative granularity applies, using absolute date"
        );
        past.format(formats::ABSOLUTE_DATE_TIME).to_string()
    }

    /// Describe `past` relative to the current local time
    #[must_use]
    pub fn format_since_now(&self, past: NaiveDateTime, words: &str) -> String {
        self.format(past, Local::now().naive_local(), words)
    }
}

fn phrase(number: i64, forms: &PluralForms, words: &str) -> String {
    format!("{number} {} {words}", forms.select(number))
}

/// Whole calendar months from `earlier` to `later` (`earlier <= later`)
fn whole_months_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());

    // The last month is incomplete until `later` reaches the same day and time
    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}
