// ABOUTME: Word-boundary truncation of post text with a trailing read-more fragment
// ABOUTME: Escapes the kept prefix for HTML; untruncated text is returned as-is
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use crate::constants::locale;
use std::borrow::Cow;

/// Truncates text on word boundaries and appends a read-more fragment.
///
/// Words are separated by whitespace and their lengths (in characters, not
/// counting separators) are summed. The first word that pushes the running
/// total past the limit cuts the text: the words kept so far are joined by
/// single spaces, HTML-escaped, and followed by `...` and the fragment.
///
/// Escaping covers `& < > " '`. The apostrophe is written as the hex
/// reference `&#x27;` rather than the decimal `&#039;`; both decode to the
/// same character in HTML.
///
/// Text that never crosses the limit comes back untouched and *unescaped*.
/// Callers embedding it in markup must escape it themselves.
#[derive(Debug, Clone)]
pub struct Truncator {
    read_more: Cow<'static, str>,
}

impl Default for Truncator {
    fn default() -> Self {
        Self {
            read_more: Cow::Borrowed(locale::READ_MORE_FRAGMENT),
        }
    }
}

impl Truncator {
    /// Create a truncator with a custom read-more fragment
    #[must_use]
    pub fn with_read_more(read_more: impl Into<Cow<'static, str>>) -> Self {
        Self {
            read_more: read_more.into(),
        }
    }

    /// Fragment appended after the ellipsis
    #[must_use]
    pub fn read_more(&self) -> &str {
        &self.read_more
    }

    /// Truncate `text` to at most `limit` characters of words
    #[must_use]
    pub fn truncate<'a>(&self, text: &'a str, limit: usize) -> Cow<'a, str> {
        let mut total = 0usize;
        let mut kept: Vec<&str> = Vec::new();

        for word in text.split_whitespace() {
            total += word.chars().count();
            if total > limit {
                let prefix = kept.join(" ");
                return Cow::Owned(format!(
                    "{}...{}",
                    html_escape::encode_quoted_attribute(&prefix),
                    self.read_more
                ));
            }
            kept.push(word);
        }

        Cow::Borrowed(text)
    }
}

/// Truncate with the default read-more fragment
#[must_use]
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    Truncator::default().truncate(text, limit)
}
