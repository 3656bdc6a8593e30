// ABOUTME: Russian word forms and markup fragments used by the default locale
// ABOUTME: Grouped as one/few/many triples for the plural form selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

/// Month: one / few / many
pub const MONTH: [&str; 3] = ["месяц", "месяца", "месяцев"];
/// Week: one / few / many
pub const WEEK: [&str; 3] = ["неделя", "недели", "недель"];
/// Day: one / few / many
pub const DAY: [&str; 3] = ["день", "дня", "дней"];
/// Hour: one / few / many
pub const HOUR: [&str; 3] = ["час", "часа", "часов"];
/// Minute: one / few / many
pub const MINUTE: [&str; 3] = ["минута", "минуты", "минут"];

/// Trailing word appended to relative times ("ago")
pub const AGO: &str = "назад";

/// Markup appended to truncated post text
pub const READ_MORE_FRAGMENT: &str = r##"
            <div class="post-text__more-link-wrapper">
                <a class="post-text__more-link" href="#">Читать далее</a>
            </div>
        "##;

/// Message appended to a tag that fails validation
pub const INVALID_TAG_SUFFIX: &str =
    "- некорректный тег. Допустимы только русские или английские строчные символы. Разделяйте теги пробелом";
