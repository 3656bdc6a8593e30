// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory database handles, and a seeded posts schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `readme_site`

use anyhow::Result;
use readme_site::config::database::DatabaseUrl;
use readme_site::database::{insert, DbHandle, Value};
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database handle
pub async fn create_test_handle() -> Result<DbHandle> {
    init_test_logging();
    Ok(DbHandle::connect_url(&DatabaseUrl::Memory, Duration::from_secs(5)).await?)
}

/// Schema mirroring the site's content tables
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        login TEXT NOT NULL
    )",
    "CREATE TABLE posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        title TEXT NOT NULL,
        body TEXT,
        rating REAL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE likes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        post_id INTEGER NOT NULL,
        user_id INTEGER NOT NULL
    )",
];

/// In-memory handle with the schema created and a small data set:
/// one user, two posts, three likes on post 1
pub async fn create_seeded_handle() -> Result<DbHandle> {
    let mut handle = create_test_handle().await?;
    for statement in SCHEMA {
        insert(&mut handle, statement, Vec::new()).await?;
    }

    insert(
        &mut handle,
        "INSERT INTO users (email, login) VALUES (?, ?)",
        vec!["ann@example.com".into(), "ann".into()],
    )
    .await?;

    insert(
        &mut handle,
        "INSERT INTO posts (user_id, title, body, rating, created_at) VALUES (?, ?, ?, ?, ?)",
        vec![
            1.into(),
            "First post".into(),
            "Hello & welcome".into(),
            4.5.into(),
            "2024-03-01 12:00:00".into(),
        ],
    )
    .await?;
    insert(
        &mut handle,
        "INSERT INTO posts (user_id, title, body, rating, created_at) VALUES (?, ?, NULL, ?, ?)",
        vec![
            1.into(),
            "Second post".into(),
            3.0.into(),
            "2024-03-10 08:30:00".into(),
        ],
    )
    .await?;

    for user_id in [1, 2, 3] {
        insert(
            &mut handle,
            "INSERT INTO likes (post_id, user_id) VALUES (?, ?)",
            vec![1.into(), Value::from(user_id)],
        )
        .await?;
    }

    Ok(handle)
}
