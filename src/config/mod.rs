// ABOUTME: Environment-based configuration for database, templates, and logging
// ABOUTME: Aggregates the per-area configs into SiteConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

//! Configuration is read from environment variables only.
//!
//! | Variable             | Default                    |
//! |----------------------|----------------------------|
//! | `DATABASE_URL`       | `sqlite:./data/readme.db`  |
//! | `QUERY_TIMEOUT_SECS` | `5`                        |
//! | `TEMPLATES_DIR`      | `templates`                |
//! | `RUST_LOG`           | `info`                     |
//! | `LOG_FORMAT`         | `pretty`                   |

/// Database connection configuration
pub mod database;
/// Template root configuration
pub mod templates;

use crate::errors::AppResult;
use crate::logging::LoggingConfig;
use database::DatabaseConfig;
use std::env;
use templates::TemplateConfig;

/// Complete site configuration
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Template root
    pub templates: TemplateConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Load the whole configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
            templates: TemplateConfig::from_env(),
            logging: LoggingConfig::from_env(),
        })
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
