// ABOUTME: Error types for template resolution, compilation, and rendering
// ABOUTME: Maps template failures onto the unified AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use crate::errors::{AppError, ErrorCode};
use std::io;
use thiserror::Error;

/// Template failures
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// No file for this name under the templates root
    #[error("Template '{name}' not found")]
    NotFound {
        /// Requested template name
        name: String,
    },

    /// The file exists but could not be read
    #[error("Template '{name}' could not be read: {source}")]
    Unreadable {
        /// Requested template name
        name: String,
        /// Underlying IO failure
        #[source]
        source: io::Error,
    },

    /// Name is empty, absolute, or escapes the templates root
    #[error("Invalid template name '{name}'")]
    InvalidName {
        /// Requested template name
        name: String,
    },

    /// Template or partial source does not compile
    #[error("Template '{name}' does not compile: {source}")]
    Syntax {
        /// Template or partial name
        name: String,
        /// Engine compile error with line and column
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// Compiled template failed while rendering
    #[error("Template '{name}' failed to render: {source}")]
    Render {
        /// Template name
        name: String,
        /// Engine render error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Render kept requesting new partials past the limit
    #[error("Template '{name}' loads more than {limit} partials")]
    TooManyPartials {
        /// Template name
        name: String,
        /// Partial limit per render
        limit: usize,
    },
}

impl From<TemplateError> for AppError {
    fn from(error: TemplateError) -> Self {
        let code = match &error {
            TemplateError::NotFound { .. } => ErrorCode::ResourceNotFound,
            TemplateError::InvalidName { .. } => ErrorCode::InvalidInput,
            TemplateError::Unreadable { .. } => ErrorCode::InternalError,
            _ => ErrorCode::TemplateError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
