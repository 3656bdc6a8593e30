// ABOUTME: Single-connection database handle passed explicitly into every query
// ABOUTME: Owns one SQLite connection; dropping or closing the handle releases it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use super::errors::DatabaseError;
use crate::config::database::{DatabaseConfig, DatabaseUrl};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// One database connection plus the query timeout that applies to it.
///
/// Every data-access operation takes `&mut DbHandle`, so the borrow checker
/// guarantees a handle is never used by two operations at once. Callers that
/// need concurrency open one handle per task. The connection is released when
/// the handle is dropped; [`DbHandle::close`] does the same but reports errors.
pub struct DbHandle {
    connection: SqliteConnection,
    query_timeout: Duration,
}

impl fmt::Debug for DbHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbHandle")
            .field("query_timeout", &self.query_timeout)
            .finish_non_exhaustive()
    }
}

impl DbHandle {
    /// Open a connection described by `config`
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Connect`] if the URL is invalid or the
    /// database cannot be opened
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Self::connect_url(&config.url, config.query_timeout).await
    }

    /// Open a connection to `url` with an explicit query timeout
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Connect`] if the URL is invalid or the
    /// database cannot be opened
    pub async fn connect_url(
        url: &DatabaseUrl,
        query_timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        let connection_string = url.to_connection_string();
        let connect_error = |source| DatabaseError::Connect {
            url: connection_string.clone(),
            source,
        };

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(connect_error)?
            .create_if_missing(true);
        let connection = options.connect().await.map_err(connect_error)?;

        info!(db.url = %connection_string, ?query_timeout, "Database handle opened");
        Ok(Self {
            connection,
            query_timeout,
        })
    }

    /// Timeout applied to each statement execution
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    pub(crate) fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.connection
    }

    /// Close the connection, reporting any error
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Close`] if the driver fails to shut down cleanly
    pub async fn close(self) -> Result<(), DatabaseError> {
        self.connection
            .close()
            .await
            .map_err(|source| DatabaseError::Close { source })?;
        debug!("Database handle closed");
        Ok(())
    }
}
