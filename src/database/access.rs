// ABOUTME: Data-access operations executing bound statements against a handle
// ABOUTME: Fetches single rows or row lists, counts, inserts, and lists whole tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

//! Execution of bound statements.
//!
//! Preparation and binding failures are fatal and come back as `Err`.
//! Execution failures (constraint violations, timeouts, ...) are expected at
//! runtime: they are logged and surface as `Ok(None)` so the caller can decide
//! what "not found" means for it.

use super::binder::{bind, BoundStatement};
use super::errors::DatabaseError;
use super::handle::DbHandle;
use super::rows::{decode_row, FetchMode, Row, RowSet};
use super::value::Value;
use crate::logging::AppLogger;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::warn;

/// Name of the field read back by [`count_where`]
pub const COUNT_FIELD: &str = "count";

/// Execute `query` with `params` and return rows shaped by `mode`.
///
/// Returns `Ok(None)` when execution fails or times out, and for a
/// [`FetchMode::Single`] query that matches no row.
///
/// # Errors
///
/// Returns a fatal [`DatabaseError`] if the statement cannot be prepared or
/// the parameters cannot be bound
pub async fn execute(
    handle: &mut DbHandle,
    query: &str,
    params: Vec<Value>,
    mode: FetchMode,
) -> Result<Option<RowSet>, DatabaseError> {
    let bound = bind(handle, query, params).await?;
    let timeout = handle.query_timeout();
    let started = Instant::now();

    let outcome = match mode {
        FetchMode::Single => {
            with_timeout(timeout, bound.query().fetch_optional(handle.connection()))
                .await
                .map(|row| row.map(|row| RowSet::Single(decode_row(&row))))
        }
        FetchMode::All => with_timeout(timeout, bound.query().fetch_all(handle.connection()))
            .await
            .map(|rows| Some(RowSet::All(rows.iter().map(decode_row).collect()))),
    };

    Ok(recover(&bound, "select", started, outcome))
}

/// Execute and return at most one row
///
/// # Errors
///
/// Returns a fatal [`DatabaseError`] on preparation or binding failure
pub async fn fetch_single(
    handle: &mut DbHandle,
    query: &str,
    params: Vec<Value>,
) -> Result<Option<Row>, DatabaseError> {
    Ok(execute(handle, query, params, FetchMode::Single)
        .await?
        .and_then(RowSet::into_single))
}

/// Execute and return every row
///
/// # Errors
///
/// Returns a fatal [`DatabaseError`] on preparation or binding failure
pub async fn fetch_all(
    handle: &mut DbHandle,
    query: &str,
    params: Vec<Value>,
) -> Result<Option<Vec<Row>>, DatabaseError> {
    Ok(execute(handle, query, params, FetchMode::All)
        .await?
        .map(RowSet::into_rows))
}

/// Count rows of `table` whose `column` equals `value`.
///
/// Runs `SELECT COUNT(*) AS count FROM <table> WHERE <column> = ?` with `value`
/// bound to the placeholder and returns the row's `count` field. `None` means
/// the execution failed.
///
/// # Errors
///
/// Returns [`DatabaseError::InvalidIdentifier`] if `table` or `column` is not a
/// plain identifier, or another fatal error on preparation failure
pub async fn count_where(
    handle: &mut DbHandle,
    table: &str,
    column: &str,
    value: impl Into<Value>,
) -> Result<Option<i64>, DatabaseError> {
    let table = checked_identifier(table)?;
    let column = checked_identifier(column)?;
    let query = format!("SELECT COUNT(*) AS {COUNT_FIELD} FROM {table} WHERE {column} = ?");

    let row = fetch_single(handle, &query, vec![value.into()]).await?;
    Ok(row.and_then(|row| row.get_i64(COUNT_FIELD)))
}

/// Every row of `table`, in storage order
///
/// # Errors
///
/// Returns [`DatabaseError::InvalidIdentifier`] for a bad table name, or
/// another fatal error on preparation failure
pub async fn list_all(
    handle: &mut DbHandle,
    table: &str,
) -> Result<Option<Vec<Row>>, DatabaseError> {
    let table = checked_identifier(table)?;
    fetch_all(handle, &format!("SELECT * FROM {table}"), Vec::new()).await
}

/// Execute an `INSERT` and return the id of the inserted row.
///
/// `None` means the execution failed (for example a constraint violation).
///
/// # Errors
///
/// Returns a fatal [`DatabaseError`] on preparation or binding failure
pub async fn insert(
    handle: &mut DbHandle,
    query: &str,
    params: Vec<Value>,
) -> Result<Option<i64>, DatabaseError> {
    let bound = bind(handle, query, params).await?;
    let timeout = handle.query_timeout();
    let started = Instant::now();

    let outcome = with_timeout(timeout, bound.query().execute(handle.connection()))
        .await
        .map(|result| Some(result.last_insert_rowid()));

    Ok(recover(&bound, "insert", started, outcome))
}

async fn with_timeout<T>(
    timeout: Duration,
    execution: impl Future<Output = Result<T, sqlx::Error>>,
) -> Result<T, DatabaseError> {
    match tokio::time::timeout(timeout, execution).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(DatabaseError::Execution { source }),
        Err(_) => Err(DatabaseError::Timeout { timeout }),
    }
}

fn recover<T>(
    bound: &BoundStatement,
    operation: &str,
    started: Instant,
    outcome: Result<Option<T>, DatabaseError>,
) -> Option<T> {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    match outcome {
        Ok(value) => {
            AppLogger::log_database_operation(operation, bound.sql(), true, duration_ms);
            value
        }
        Err(error) => {
            AppLogger::log_database_operation(operation, bound.sql(), false, duration_ms);
            warn!(
                db.query = %bound.sql(),
                db.signature = %bound.signature(),
                error = %error,
                "Statement execution failed, returning empty result"
            );
            None
        }
    }
}

/// Accept only plain SQL identifiers (`[A-Za-z_][A-Za-z0-9_]*`)
fn checked_identifier(identifier: &str) -> Result<&str, DatabaseError> {
    let mut chars = identifier.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(identifier)
    } else {
        Err(DatabaseError::InvalidIdentifier {
            identifier: identifier.to_owned(),
        })
    }
}
