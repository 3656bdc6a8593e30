// ABOUTME: Template configuration for the page renderer
// ABOUTME: Resolves the templates root directory from TEMPLATES_DIR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use super::env_var_or;
use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where page templates live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Root directory; template names are resolved relative to it
    pub root: PathBuf,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(defaults::TEMPLATES_DIR),
        }
    }
}

impl TemplateConfig {
    /// Load template configuration from `TEMPLATES_DIR`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            root: PathBuf::from(env_var_or("TEMPLATES_DIR", defaults::TEMPLATES_DIR)),
        }
    }
}
