// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default limits, date formats, and locale word forms for the readme site
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Locale word forms (Russian) used by the presentation formatters
pub mod locale;

/// Date and time formats
pub mod formats {
    /// Storage format of timestamps (`YYYY-MM-DD HH:MM:SS`)
    pub const STORED_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";
    /// Strict calendar date format accepted by the date validator
    pub const CALENDAR_DATE: &str = "%Y-%m-%d";
    /// Absolute fallback used when no relative granularity applies
    pub const ABSOLUTE_DATE_TIME: &str = "%d.%m.%Y %H:%M";
}

/// Size limits
pub mod limits {
    /// Default number of characters kept by text truncation
    pub const DEFAULT_TRUNCATE_LIMIT: usize = 300;
    /// Days in a week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Elapsed weeks from which relative time is reported in months
    pub const WEEKS_BEFORE_MONTHS: i64 = 5;
}

/// Default configuration values
pub mod defaults {
    /// Database used when `DATABASE_URL` is not set
    pub const DATABASE_URL: &str = "sqlite:./data/readme.db";
    /// Seconds a single statement may run before it is abandoned
    pub const QUERY_TIMEOUT_SECS: u64 = 5;
    /// Root directory of page templates
    pub const TEMPLATES_DIR: &str = "templates";
}

/// Service identification
pub mod service_names {
    /// Name reported in structured logs
    pub const README_SITE: &str = "readme-site";
}
