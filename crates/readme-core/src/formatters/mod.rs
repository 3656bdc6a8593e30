// ABOUTME: Presentation formatters used when turning stored rows into page text
// ABOUTME: Plural form selection, relative time, text truncation, and date helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

//! # Presentation Formatters
//!
//! Pure functions with no I/O. Word forms are parameters rather than
//! hard-coded strings; [`UnitForms::russian`] and the constants in
//! [`crate::constants::locale`] provide the site's default locale.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use readme_core::formatters::{select_plural_form, RelativeTimeFormatter};
//!
//! assert_eq!(select_plural_form(21, "день", "дня", "дней"), "день");
//!
//! let now = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let past = now - chrono::Duration::days(2);
//! assert_eq!(RelativeTimeFormatter::default().format(past, now, "назад"), "2 дня назад");
//! ```

/// Strict date validation, timestamp parsing, seed timestamps
pub mod dates;
/// Slavic plural form selection
pub mod plural;
/// Relative time phrases ("5 минут назад")
pub mod relative_time;
/// Word-boundary text truncation with a read-more fragment
pub mod text;

pub use dates::{is_date_valid, parse_timestamp, random_past_timestamp, SeedUnit};
pub use plural::{select_plural_form, PluralForms};
pub use relative_time::{RelativeTimeFormatter, UnitForms};
pub use text::{truncate, Truncator};
