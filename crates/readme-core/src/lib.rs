// ABOUTME: Core types and presentation formatters for the readme publishing site
// ABOUTME: Foundation crate with error handling, constants, and locale-aware formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

#![deny(unsafe_code)]

//! # Readme Core
//!
//! Foundation crate for the readme publishing site. It holds everything that
//! does not need a database connection, so the presentation helpers can be
//! used (and tested) without one.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default limits, formats, and locale strings
//! - **formatters**: Plural forms, relative time, text truncation, date helpers
//! - **validation**: Form field validators (tags)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Locale-aware presentation formatters
pub mod formatters;

/// Form field validators
pub mod validation;
