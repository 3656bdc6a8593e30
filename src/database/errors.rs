// ABOUTME: Structured error types for statement preparation, binding, and execution
// ABOUTME: Splits failures into fatal programming errors and recoverable runtime errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use crate::errors::{AppError, ErrorCode, Severity};
use std::time::Duration;

/// Errors raised by the data-access layer
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The connection could not be established
    #[error("Failed to connect to database '{url}'")]
    Connect {
        /// Connection string that was used
        url: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// The query text could not be prepared (malformed SQL, unknown table)
    #[error("Failed to prepare statement: {query}")]
    Prepare {
        /// Query text that failed
        query: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// The parameters do not match the statement's placeholders
    #[error(
        "Failed to bind parameters ({signature}) to statement: expected {expected} placeholder value(s), got {provided}"
    )]
    Bind {
        /// Query text that failed
        query: String,
        /// Type signature of the provided values
        signature: String,
        /// Number of placeholders in the statement
        expected: usize,
        /// Number of values provided
        provided: usize,
    },

    /// A table or column name is not a plain SQL identifier
    #[error("Invalid SQL identifier '{identifier}'")]
    InvalidIdentifier {
        /// Rejected identifier
        identifier: String,
    },

    /// The statement ran but the database reported a failure
    #[error("Query execution failed")]
    Execution {
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// The statement did not finish within the configured timeout
    #[error("Query timed out after {timeout:?}")]
    Timeout {
        /// Timeout that elapsed
        timeout: Duration,
    },

    /// Closing the connection failed
    #[error("Failed to close database connection")]
    Close {
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },
}

impl DatabaseError {
    /// How the caller must treat this error.
    ///
    /// Connection, preparation, binding and identifier errors are programming
    /// or schema mismatches and are fatal. Execution failures and timeouts are
    /// expected at runtime and recoverable.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Connect { .. }
            | Self::Prepare { .. }
            | Self::Bind { .. }
            | Self::InvalidIdentifier { .. } => Severity::Fatal,
            Self::Execution { .. } | Self::Timeout { .. } | Self::Close { .. } => {
                Severity::Recoverable
            }
        }
    }

    /// Whether the current request must be aborted
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.severity(), Severity::Fatal)
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        let code = match error {
            DatabaseError::InvalidIdentifier { .. } => ErrorCode::InvalidInput,
            _ => ErrorCode::DatabaseError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_split() {
        let bind = DatabaseError::Bind {
            query: "SELECT ?".into(),
            signature: "ii".into(),
            expected: 1,
            provided: 2,
        };
        assert_eq!(bind.severity(), Severity::Fatal);

        let timeout = DatabaseError::Timeout {
            timeout: Duration::from_secs(5),
        };
        assert_eq!(timeout.severity(), Severity::Recoverable);
        assert!(!timeout.is_fatal());
    }

    #[test]
    fn test_app_error_codes() {
        let identifier = AppError::from(DatabaseError::InvalidIdentifier {
            identifier: "a b".into(),
        });
        assert_eq!(identifier.code, ErrorCode::InvalidInput);

        let bind = AppError::from(DatabaseError::Bind {
            query: "SELECT ?".into(),
            signature: String::new(),
            expected: 1,
            provided: 0,
        });
        assert_eq!(bind.code, ErrorCode::DatabaseError);
        assert_eq!(bind.code.exit_code(), 1);
        assert!(bind.message.contains("expected 1 placeholder"));
    }
}
