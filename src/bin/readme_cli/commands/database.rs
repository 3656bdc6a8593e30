// ABOUTME: Database-backed readme-cli commands
// ABOUTME: count, query, and insert over a handle opened for the command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use anyhow::Context;
use readme_site::config::SiteConfig;
use readme_site::database::{count_where, execute, insert as insert_row, DbHandle, FetchMode, Value};
use readme_site::errors::AppResult;
use serde_json::Value as JsonValue;
use tracing::info;

/// Parse a command-line argument into a bindable value.
///
/// JSON numbers and strings keep their type (`7` is an integer, `"7"` text);
/// anything that is not valid JSON is taken as text verbatim.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<JsonValue>(raw).map_or_else(|_| Value::from(raw), Value::classify)
}

async fn open(config: &SiteConfig) -> AppResult<DbHandle> {
    info!(db.url = %config.database.url, "Opening database");
    Ok(DbHandle::connect(&config.database).await?)
}

/// `count <table> <column> <value>`
pub async fn count(config: &SiteConfig, table: &str, column: &str, value: &str) -> anyhow::Result<()> {
    let mut handle = open(config).await?;
    let count = count_where(&mut handle, table, column, parse_value(value)).await?;
    handle.close().await?;

    match count {
        Some(count) => println!("{count}"),
        None => println!("null"),
    }
    Ok(())
}

/// `query <sql> [-p value]... [--single]`
pub async fn query(
    config: &SiteConfig,
    sql: &str,
    params: &[String],
    single: bool,
) -> anyhow::Result<()> {
    let mode = if single { FetchMode::Single } else { FetchMode::All };
    let values = params.iter().map(|raw| parse_value(raw)).collect();

    let mut handle = open(config).await?;
    let rows = execute(&mut handle, sql, values, mode).await?;
    handle.close().await?;

    let output = serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?;
    println!("{output}");
    Ok(())
}

/// `insert <sql> [-p value]...`
pub async fn insert(config: &SiteConfig, sql: &str, params: &[String]) -> anyhow::Result<()> {
    let values = params.iter().map(|raw| parse_value(raw)).collect();

    let mut handle = open(config).await?;
    let id = insert_row(&mut handle, sql, values).await?;
    handle.close().await?;

    match id {
        Some(id) => println!("{id}"),
        None => println!("null"),
    }
    Ok(())
}
