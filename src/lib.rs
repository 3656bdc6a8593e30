// ABOUTME: Main library entry point for the readme publishing site helpers
// ABOUTME: Provides parameterized SQLite access, templating, and presentation formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

#![deny(unsafe_code)]

//! # Readme Site
//!
//! The data-access and presentation layer of a small content-publishing
//! site.
//!
//! ## Features
//!
//! - **Parameterized queries**: values of any arity are classified at runtime
//!   and bound to positional placeholders
//! - **Explicit handles**: every query takes a `&mut DbHandle`, with a
//!   per-statement timeout
//! - **Templates**: named templates rendered against an explicit context
//! - **Formatting**: Russian plural forms, "N units ago" timestamps,
//!   word-boundary truncation
//!
//! ## Architecture
//!
//! - **database**: `Value` classification, binding, execution, row shapes
//! - **templates**: `TemplateRenderer` and `TemplateContext`
//! - **formatters**: re-exported from `readme-core`
//! - **config**: environment-based configuration
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use readme_site::config::SiteConfig;
//! use readme_site::constants::locale;
//! use readme_site::database::{fetch_single, DbHandle};
//! use readme_site::errors::AppResult;
//! use readme_site::formatters::{parse_timestamp, RelativeTimeFormatter};
//! use readme_site::templates::{TemplateContext, TemplateRenderer};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = SiteConfig::from_env()?;
//!     let mut handle = DbHandle::connect(&config.database).await?;
//!     let renderer = TemplateRenderer::from_config(&config.templates);
//!
//!     let query = "SELECT * FROM posts WHERE id = ?";
//!     if let Some(post) = fetch_single(&mut handle, query, vec![1.into()]).await? {
//!         let ago = post
//!             .get_text("created_at")
//!             .and_then(parse_timestamp)
//!             .map(|at| RelativeTimeFormatter::default().format_since_now(at, locale::AGO))
//!             .unwrap_or_default();
//!         let context = TemplateContext::new().with("ago", ago).with("post", post);
//!         println!("{}", renderer.render("post.html", &context));
//!     }
//!     handle.close().await?;
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Parameterized data access over an explicit handle
pub mod database;

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Template rendering
pub mod templates;

pub use readme_core::{constants, formatters, validation};
