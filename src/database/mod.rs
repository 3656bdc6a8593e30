// ABOUTME: Parameterized data access over an explicit single-connection handle
// ABOUTME: Value typing, statement binding, execution, and row shaping for SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

//! # Data Access
//!
//! Leaf-first:
//!
//! - [`value`]: `Value`, `WireType`, `TypeSignature`
//! - [`binder`]: prepares a query and binds values to its placeholders
//! - [`access`]: executes bound statements and returns rows
//!
//! Every operation takes `&mut DbHandle`. Acquiring and releasing the handle
//! is the caller's job; there is no pool and no transaction management.
//!
//! ```rust,no_run
//! use readme_site::config::database::DatabaseConfig;
//! use readme_site::database::{count_where, DbHandle};
//!
//! # async fn run() -> Result<(), readme_site::database::DatabaseError> {
//! let mut handle = DbHandle::connect(&DatabaseConfig::default()).await?;
//! let likes = count_where(&mut handle, "likes", "post_id", 7).await?;
//! println!("likes: {}", likes.unwrap_or_default());
//! handle.close().await?;
//! # Ok(())
//! # }
//! ```

/// Query execution and convenience helpers
pub mod access;
/// Statement preparation and parameter binding
pub mod binder;
/// Error types for data access
pub mod errors;
/// Explicit single-connection handle
pub mod handle;
/// Result row shapes
pub mod rows;
/// Bindable values and type signatures
pub mod value;

pub use access::{count_where, execute, fetch_all, fetch_single, insert, list_all, COUNT_FIELD};
pub use binder::{bind, BoundStatement};
pub use errors::DatabaseError;
pub use handle::DbHandle;
pub use rows::{FetchMode, Row, RowSet};
pub use value::{TypeSignature, Value, WireType};
