// ABOUTME: Plural form selection for Slavic-language numerals (one / few / many)
// ABOUTME: Maps a cardinal number to the grammatical form that follows it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use std::borrow::Cow;

/// Pick the noun form that follows `number`.
///
/// Rules are checked in order and the first match wins:
///
/// 1. `number % 100` in `11..=20` → `many`
/// 2. `number % 10 > 5` → `many`
/// 3. `number % 10 == 1` → `one`
/// 4. `number % 10` in `2..=4` → `few`
/// 5. anything else → `many`
///
/// Rule 1 takes precedence over rule 3, so `11` selects `many`.
///
/// ```rust
/// use readme_core::formatters::select_plural_form;
///
/// let forms = |n| select_plural_form(n, "минута", "минуты", "минут");
/// assert_eq!(forms(1), "минута");
/// assert_eq!(forms(3), "минуты");
/// assert_eq!(forms(11), "минут");
/// assert_eq!(forms(101), "минута");
/// ```
#[must_use]
pub fn select_plural_form<'a>(number: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let mod10 = number % 10;
    let mod100 = number % 100;

    if (11..=20).contains(&mod100) || mod10 > 5 {
        many
    } else if mod10 == 1 {
        one
    } else if (2..=4).contains(&mod10) {
        few
    } else {
        many
    }
}

/// The three grammatical forms of one noun
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms {
    /// Form after 1, 21, 31, ... ("минута")
    pub one: Cow<'static, str>,
    /// Form after 2-4, 22-24, ... ("минуты")
    pub few: Cow<'static, str>,
    /// Form after 0, 5-20, 25-30, ... ("минут")
    pub many: Cow<'static, str>,
}

impl PluralForms {
    /// Build forms from owned or borrowed strings
    #[must_use]
    pub fn new(
        one: impl Into<Cow<'static, str>>,
        few: impl Into<Cow<'static, str>>,
        many: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            one: one.into(),
            few: few.into(),
            many: many.into(),
        }
    }

    /// Build forms from a `[one, few, many]` table of static strings
    #[must_use]
    pub const fn from_table(table: [&'static str; 3]) -> Self {
        Self {
            one: Cow::Borrowed(table[0]),
            few: Cow::Borrowed(table[1]),
            many: Cow::Borrowed(table[2]),
        }
    }

    /// Form for `number`
    #[must_use]
    pub fn select(&self, number: i64) -> &str {
        select_plural_form(number, &self.one, &self.few, &self.many)
    }
}
