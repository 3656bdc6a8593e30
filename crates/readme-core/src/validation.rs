// ABOUTME: Validators for user-submitted post fields
// ABOUTME: Checks that hashtags contain only Latin or Cyrillic letters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use crate::constants::locale;
use regex::Regex;
use std::sync::OnceLock;

static TAG_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn tag_pattern() -> Option<&'static Regex> {
    TAG_PATTERN
        .get_or_init(|| Regex::new(r"(?i)^[a-zа-яё]+$").ok())
        .as_ref()
}

/// Validate a space-separated list of tags.
///
/// Every tag must consist of Latin or Cyrillic letters only. The error message
/// names the first offending tag.
///
/// # Errors
///
/// Returns the user-facing message for the first tag that does not match.
pub fn validate_tags(tags: &str) -> Result<(), String> {
    for tag in tags.split(' ') {
        let valid = tag_pattern().is_some_and(|re| re.is_match(tag));
        if !valid {
            return Err(format!("{tag}{}", locale::INVALID_TAG_SUFFIX));
        }
    }
    Ok(())
}
