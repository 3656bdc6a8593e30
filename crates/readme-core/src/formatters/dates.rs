// ABOUTME: Date helpers for form validation, stored timestamp parsing, and seed data
// ABOUTME: Strict YYYY-MM-DD validation and random past timestamps for demo content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use crate::constants::formats;
use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use rand::Rng;

/// Check that `date` is a real calendar date written as `YYYY-MM-DD`.
///
/// ```rust
/// use readme_core::formatters::is_date_valid;
///
/// assert!(is_date_valid("2019-01-01"));
/// assert!(is_date_valid("2016-02-29"));
/// assert!(!is_date_valid("2019-04-31"));
/// assert!(!is_date_valid("10.10.2010"));
/// assert!(!is_date_valid("10/10/2010"));
/// ```
#[must_use]
pub fn is_date_valid(date: &str) -> bool {
    NaiveDate::parse_from_str(date, formats::CALENDAR_DATE).is_ok()
}

/// Parse a timestamp stored as `YYYY-MM-DD HH:MM:SS`
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), formats::STORED_TIMESTAMP).ok()
}

/// Unit used when generating seed timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedUnit {
    /// Up to 59 minutes back
    Minutes,
    /// Up to 23 hours back
    Hours,
    /// Up to 6 days back
    Days,
    /// Up to 4 weeks back
    Weeks,
    /// Up to 11 months back
    Months,
}

impl SeedUnit {
    const ALL: [Self; 5] = [
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Weeks,
        Self::Months,
    ];

    /// Unit for a seed index; out-of-range indexes are clamped to `0..=4`
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.clamp(0, 4) as usize]
    }

    /// Largest amount of this unit a seed timestamp may lie in the past
    #[must_use]
    pub const fn max_amount(self) -> u32 {
        match self {
            Self::Minutes => 59,
            Self::Hours => 23,
            Self::Days => 6,
            Self::Weeks => 4,
            Self::Months => 11,
        }
    }

    fn subtract(self, from: NaiveDateTime, amount: u32) -> Option<NaiveDateTime> {
        let amount_i64 = i64::from(amount);
        match self {
            Self::Minutes => from.checked_sub_signed(Duration::minutes(amount_i64)),
            Self::Hours => from.checked_sub_signed(Duration::hours(amount_i64)),
            Self::Days => from.checked_sub_signed(Duration::days(amount_i64)),
            Self::Weeks => from.checked_sub_signed(Duration::weeks(amount_i64)),
            Self::Months => from.checked_sub_months(Months::new(amount)),
        }
    }
}

/// Random timestamp before `now`, used to give demo posts varied ages.
///
/// The index selects the unit (see [`SeedUnit::from_index`]); the distance is a
/// random amount between 1 and the unit's maximum.
pub fn random_past_timestamp<R: Rng + ?Sized>(
    rng: &mut R,
    index: i64,
    now: NaiveDateTime,
) -> NaiveDateTime {
    let unit = SeedUnit::from_index(index);
    let amount = rng.gen_range(1..=unit.max_amount());
    unit.subtract(now, amount).unwrap_or(now)
}
