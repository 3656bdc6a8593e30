// ABOUTME: Renders named templates from a fixed root with an explicit context
// ABOUTME: Unreadable or malformed templates degrade to empty output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

//! # Templates
//!
//! Templates are Handlebars files under a root directory, compiled on every
//! render so edits show up without a restart. A template sees exactly the
//! [`TemplateContext`] it is given. Missing names render as empty text and
//! nothing from the caller's environment is registered with the engine.
//!
//! | Syntax                                    | Meaning                          |
//! |-------------------------------------------|----------------------------------|
//! | `{{ post.title }}`                        | HTML-escaped value               |
//! | `{{{ body }}}`                            | raw value                        |
//! | `{{#if flag}}..{{else}}..{{/if}}`         | conditional                      |
//! | `{{#each posts}}..{{else}}..{{/each}}`    | loop with `this`, `@index`, `../`|
//! | `{{> header}}`                            | partial `header` or `header.html`|
//! | `\{{ literal }}`                          | braces kept as text              |
//!
//! ```rust
//! use readme_site::templates::{TemplateContext, TemplateRenderer};
//!
//! let context = TemplateContext::new().with("name", "<Ann>");
//! let html = TemplateRenderer::render_str("Hi {{ name }}", &context).unwrap();
//! assert_eq!(html, "Hi &lt;Ann&gt;");
//! ```

/// Render context
pub mod context;
/// Template error types
pub mod errors;

pub use context::TemplateContext;
pub use errors::TemplateError;

use crate::config::templates::TemplateConfig;
use crate::logging::AppLogger;
use handlebars::{Handlebars, RenderErrorReason};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Distinct partials one render may load
const MAX_PARTIALS: usize = 64;

/// Extension tried for partial names written without one
const PARTIAL_EXTENSION: &str = "html";

/// Name reported for in-memory sources
const INLINE_TEMPLATE: &str = "<inline>";

/// Engine with HTML escaping and lenient missing-variable handling
fn engine() -> Handlebars<'static> {
    let mut engine = Handlebars::new();
    engine.set_strict_mode(false);
    engine.register_escape_fn(|text| html_escape::encode_quoted_attribute(text).into_owned());
    engine
}

/// Resolves template names under a root directory and renders them
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    root: PathBuf,
}

impl TemplateRenderer {
    /// Renderer reading templates from `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Renderer for the configured templates directory
    #[must_use]
    pub fn from_config(config: &TemplateConfig) -> Self {
        Self::new(config.root.clone())
    }

    /// Templates root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a template name to its file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidName`] for empty or absolute names and
    /// for names containing `..` or other non-plain components
    pub fn resolve(&self, name: &str) -> Result<PathBuf, TemplateError> {
        let relative = Path::new(name);
        let plain = !name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !plain {
            return Err(TemplateError::InvalidName {
                name: name.to_owned(),
            });
        }
        Ok(self.root.join(relative))
    }

    fn read(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.resolve(name)?;
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                TemplateError::NotFound {
                    name: name.to_owned(),
                }
            } else {
                TemplateError::Unreadable {
                    name: name.to_owned(),
                    source,
                }
            }
        })
    }

    fn read_partial(&self, name: &str) -> Result<String, TemplateError> {
        match self.read(name) {
            Err(TemplateError::NotFound { .. }) if Path::new(name).extension().is_none() => {
                self.read(&format!("{name}.{PARTIAL_EXTENSION}"))
            }
            other => other,
        }
    }

    /// Render `name` with `context`, reporting every failure.
    ///
    /// Partials are read from the same root the first time the template asks
    /// for them.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the name is invalid, a file cannot be
    /// read, a template or partial does not compile, or rendering fails
    pub fn try_render(&self, name: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        let source = self.read(name)?;
        let mut engine = engine();
        engine
            .register_template_string(name, source)
            .map_err(|source| TemplateError::Syntax {
                name: name.to_owned(),
                source: Box::new(source),
            })?;

        let mut loaded = 0usize;
        loop {
            let error = match engine.render(name, context) {
                Ok(html) => return Ok(html),
                Err(error) => error,
            };
            let missing = match error.reason() {
                RenderErrorReason::PartialNotFound(partial) => partial.clone(),
                _ => {
                    return Err(TemplateError::Render {
                        name: name.to_owned(),
                        source: Box::new(error),
                    })
                }
            };
            if loaded == MAX_PARTIALS {
                return Err(TemplateError::TooManyPartials {
                    name: name.to_owned(),
                    limit: MAX_PARTIALS,
                });
            }

            let partial = self.read_partial(&missing)?;
            engine
                .register_partial(&missing, partial)
                .map_err(|source| TemplateError::Syntax {
                    name: missing.clone(),
                    source: Box::new(source),
                })?;
            debug!(template.name = %name, template.partial = %missing, "Partial loaded");
            loaded += 1;
        }
    }

    /// Render `name` with `context`; any failure yields an empty string
    #[must_use]
    pub fn render(&self, name: &str, context: &TemplateContext) -> String {
        match self.try_render(name, context) {
            Ok(html) => {
                AppLogger::log_template_render(name, true, html.len());
                html
            }
            Err(e) => {
                warn!(template.name = %name, error = %e, "Template render failed, returning empty output");
                AppLogger::log_template_render(name, false, 0);
                String::new()
            }
        }
    }

    /// Render template source held in memory. Partials are unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] if the source does not compile or
    /// fails to render
    pub fn render_str(source: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        engine()
            .render_template(source, context)
            .map_err(|source| TemplateError::Render {
                name: INLINE_TEMPLATE.to_owned(),
                source: Box::new(source),
            })
    }
}
