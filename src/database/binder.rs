// ABOUTME: Parameter binder turning query text plus values into a bound statement
// ABOUTME: Prepares on the handle, derives the type signature, and checks placeholder arity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use super::errors::DatabaseError;
use super::handle::DbHandle;
use super::value::{TypeSignature, Value};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteStatement};
use sqlx::{Either, Executor, Sqlite, Statement};
use std::fmt;
use tracing::{debug, error};

/// A prepared statement together with the values bound to its placeholders.
///
/// Owned by the caller that created it and consumed by a single execution.
pub struct BoundStatement {
    statement: SqliteStatement<'static>,
    signature: TypeSignature,
    values: Vec<Value>,
}

impl fmt::Debug for BoundStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundStatement")
            .field("sql", &self.sql())
            .field("signature", &self.signature)
            .field("values", &self.values)
            .finish()
    }
}

impl BoundStatement {
    /// Query text
    #[must_use]
    pub fn sql(&self) -> &str {
        self.statement.sql()
    }

    /// Type signature of the bound values (empty when unbound)
    #[must_use]
    pub const fn signature(&self) -> &TypeSignature {
        &self.signature
    }

    /// Bound values in placeholder order
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Whether any values were bound
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.values.is_empty()
    }

    /// Number of placeholders the database reported for this statement
    #[must_use]
    pub fn placeholder_count(&self) -> Option<usize> {
        placeholder_count(&self.statement)
    }

    pub(crate) fn query(&self) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        self.values
            .iter()
            .fold(self.statement.query(), |query, value| value.bind_to(query))
    }
}

/// Prepare `query` on `handle` and bind `values` to its positional placeholders.
///
/// The type signature is built from the values in order. An empty value list
/// skips binding and returns the statement unbound.
///
/// Nothing is executed here.
///
/// # Errors
///
/// Both errors are fatal (see [`DatabaseError::is_fatal`]):
/// - [`DatabaseError::Prepare`] if the query text cannot be prepared
/// - [`DatabaseError::Bind`] if the number of values differs from the number of
///   placeholders
pub async fn bind(
    handle: &mut DbHandle,
    query: &str,
    values: Vec<Value>,
) -> Result<BoundStatement, DatabaseError> {
    let statement = match handle.connection().prepare(query).await {
        Ok(statement) => Statement::to_owned(&statement),
        Err(source) => {
            error!(db.query = %query, error = %source, "Failed to prepare statement");
            return Err(DatabaseError::Prepare {
                query: query.to_owned(),
                source,
            });
        }
    };

    if values.is_empty() {
        debug!(db.query = %query, "Prepared statement without parameters");
        return Ok(BoundStatement {
            statement,
            signature: TypeSignature::default(),
            values,
        });
    }

    let signature = TypeSignature::from_values(&values);
    if let Some(expected) = placeholder_count(&statement) {
        if expected != values.len() {
            error!(
                db.query = %query,
                db.signature = %signature,
                expected,
                provided = values.len(),
                "Failed to bind parameters to statement"
            );
            return Err(DatabaseError::Bind {
                query: query.to_owned(),
                signature: signature.to_string(),
                expected,
                provided: values.len(),
            });
        }
    }

    debug!(db.query = %query, db.signature = %signature, "Bound statement parameters");
    Ok(BoundStatement {
        statement,
        signature,
        values,
    })
}

fn placeholder_count(statement: &SqliteStatement<'_>) -> Option<usize> {
    statement.parameters().map(|parameters| match parameters {
        Either::Left(types) => types.len(),
        Either::Right(count) => count,
    })
}
