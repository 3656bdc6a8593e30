// ABOUTME: Row shapes returned by data-access operations and SQLite row decoding
// ABOUTME: Defines FetchMode, Row (ordered column map), and RowSet (single / all)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use super::value::Value;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use sqlx::sqlite::{SqliteColumn, SqliteRow};
use sqlx::{Column, Row as _, TypeInfo, ValueRef};
use tracing::warn;

/// How many rows an execution returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// At most one row
    Single,
    /// Every row, in result order
    #[default]
    All,
}

/// One result row: column names mapped to values, in select order.
///
/// SQL `NULL` is stored as `None`. Column names are unique; when a query
/// selects the same name twice the later value wins and keeps the position of
/// the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<(String, Option<Value>)>,
}

impl Row {
    /// Build a row from `(column, value)` pairs
    #[must_use]
    pub fn new(columns: Vec<(String, Option<Value>)>) -> Self {
        Self { columns }
    }

    /// Value of `column`; `None` when the column is absent or `NULL`
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Integer value of `column`
    #[must_use]
    pub fn get_i64(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(Value::as_i64)
    }

    /// Text value of `column`
    #[must_use]
    pub fn get_text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_text)
    }

    /// Whether the row has a column called `column` (even if `NULL`)
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|(name, _)| name == column)
    }

    /// Column names in select order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// `(column, value)` pairs in select order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Set or replace a column, e.g. to add a formatted field before rendering
    pub fn set(&mut self, column: impl Into<String>, value: Option<Value>) {
        let column = column.into();
        if let Some(slot) = self.columns.iter_mut().find(|(name, _)| *name == column) {
            slot.1 = value;
        } else {
            self.columns.push((column, value));
        }
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl From<Row> for JsonValue {
    fn from(row: Row) -> Self {
        let map: Map<String, Self> = row
            .columns
            .into_iter()
            .map(|(name, value)| (name, value.map_or(Self::Null, Self::from)))
            .collect();
        Self::Object(map)
    }
}

/// Rows returned by an execution, shaped by the requested [`FetchMode`]
#[derive(Debug, Clone, PartialEq)]
pub enum RowSet {
    /// The single row of a [`FetchMode::Single`] execution
    Single(Row),
    /// All rows of a [`FetchMode::All`] execution (possibly empty)
    All(Vec<Row>),
}

impl RowSet {
    /// The single row, if this is a single-row result
    #[must_use]
    pub fn into_single(self) -> Option<Row> {
        match self {
            Self::Single(row) => Some(row),
            Self::All(_) => None,
        }
    }

    /// All rows; a single-row result becomes a one-element list
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Single(row) => vec![row],
            Self::All(rows) => rows,
        }
    }
}

impl Serialize for RowSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(row) => row.serialize(serializer),
            Self::All(rows) => rows.serialize(serializer),
        }
    }
}

/// Decode a driver row using the storage class of each value
pub(crate) fn decode_row(row: &SqliteRow) -> Row {
    let mut decoded = Row::default();
    for column in row.columns() {
        decoded.set(column.name(), decode_column(row, column));
    }
    decoded
}

fn decode_column(row: &SqliteRow, column: &SqliteColumn) -> Option<Value> {
    let index = column.ordinal();
    let storage_class = match row.try_get_raw(index) {
        Ok(raw) if raw.is_null() => return None,
        Ok(raw) => raw.type_info().name().to_owned(),
        Err(e) => {
            warn!(db.column = %column.name(), error = %e, "Column value unavailable, treating as NULL");
            return None;
        }
    };

    // TEXT is read as bytes so invalid UTF-8 survives lossily like BLOB
    let decoded = match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => row.try_get_unchecked::<i64, _>(index).map(Value::Integer),
        "REAL" => row.try_get_unchecked::<f64, _>(index).map(Value::Float),
        _ => row
            .try_get_unchecked::<Vec<u8>, _>(index)
            .map(|bytes| Value::Text(String::from_utf8_lossy(&bytes).into_owned())),
    };

    match decoded {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(db.column = %column.name(), db.storage_class = %storage_class, error = %e, "Column value failed to decode, treating as NULL");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post_row() -> Row {
        Row::new(vec![
            ("id".into(), Some(Value::Integer(1))),
            ("title".into(), Some(Value::Text("Hello".into()))),
            ("body".into(), None),
        ])
    }

    #[test]
    fn test_fetch_mode_defaults_to_all() {
        assert_eq!(FetchMode::default(), FetchMode::All);
    }

    #[test]
    fn test_row_set_adds_and_replaces_columns() {
        let mut row = post_row();
        row.set("ago", Some(Value::Text("5 минут назад".into())));
        row.set("body", Some(Value::Text("text".into())));

        assert_eq!(row.len(), 4);
        assert_eq!(row.get_text("body"), Some("text"));
        assert_eq!(
            row.column_names().collect::<Vec<_>>(),
            vec!["id", "title", "body", "ago"]
        );
    }

    #[test]
    fn test_row_converts_to_json_object() {
        let json = JsonValue::from(post_row());
        assert_eq!(json, json!({"id": 1, "title": "Hello", "body": null}));
        assert_eq!(serde_json::to_value(post_row()).unwrap(), json);
    }

    #[test]
    fn test_row_set_shapes() {
        let single = RowSet::Single(post_row());
        assert_eq!(single.clone().into_rows().len(), 1);
        assert!(single.into_single().is_some());

        let all = RowSet::All(vec![post_row(), post_row()]);
        assert_eq!(all.clone().into_rows().len(), 2);
        assert_eq!(all.into_single(), None);
    }
}
