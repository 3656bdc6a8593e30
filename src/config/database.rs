// ABOUTME: Database configuration types for the single-connection SQLite handle
// ABOUTME: Parses DATABASE_URL and the per-statement query timeout from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use super::env_var_or;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::time::Duration;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// `sqlite::memory:` selects an in-memory database, `sqlite:<path>` a file,
    /// and anything without a scheme is treated as a file path.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty URL or a non-`SQLite` scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }

        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else if path_str.is_empty() {
                Err(AppError::config("DATABASE_URL is missing a database path"))
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            Err(AppError::config(format!(
                "Unsupported database URL '{s}': only sqlite is supported"
            )))
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/readme.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Time a single statement may run before it is abandoned
    pub query_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            query_timeout: Duration::from_secs(defaults::QUERY_TIMEOUT_SECS),
        }
    }
}

impl DatabaseConfig {
    /// In-memory database with the default timeout
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: DatabaseUrl::Memory,
            ..Self::default()
        }
    }

    /// Load database configuration from environment
    ///
    /// Reads `DATABASE_URL` and `QUERY_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL))?;

        let timeout_secs: u64 = env_var_or(
            "QUERY_TIMEOUT_SECS",
            &defaults::QUERY_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .map_err(|e| AppError::config(format!("Invalid QUERY_TIMEOUT_SECS value: {e}")))?;
        if timeout_secs == 0 {
            return Err(AppError::config("QUERY_TIMEOUT_SECS must be at least 1"));
        }

        Ok(Self {
            url,
            query_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
