// ABOUTME: Bindable parameter values and their wire types for positional placeholders
// ABOUTME: Defines Value (integer/float/text), WireType tags, and the TypeSignature string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use serde::Serialize;
use serde_json::Value as JsonValue;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;
use std::fmt;

/// A single value bound to a positional placeholder.
///
/// The variant is decided where the value enters the data-access layer, so the
/// binder never has to guess at runtime. Anything that is neither a whole
/// number nor a decimal number is carried as [`Value::Text`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Whole number (`i`)
    Integer(i64),
    /// Decimal number (`d`)
    Float(f64),
    /// Text and everything unrecognized (`s`)
    Text(String),
}

impl Value {
    /// Classify a dynamically typed JSON value.
    ///
    /// Integers that fit `i64` become [`Value::Integer`], every other number
    /// becomes [`Value::Float`], strings become [`Value::Text`]. Booleans, nulls,
    /// arrays and objects fall back to their JSON text.
    #[must_use]
    pub fn classify(value: JsonValue) -> Self {
        match value {
            JsonValue::Number(number) => number.as_i64().map_or_else(
                || Self::Float(number.as_f64().unwrap_or(f64::NAN)),
                Self::Integer,
            ),
            JsonValue::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        }
    }

    /// Wire type tag of this value
    #[must_use]
    pub const fn wire_type(&self) -> WireType {
        match self {
            Self::Integer(_) => WireType::Integer,
            Self::Float(_) => WireType::Float,
            Self::Text(_) => WireType::Text,
        }
    }

    /// Integer content, if this is an integer
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric content as a float, if this is a number
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Text content, if this is text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn bind_to<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            Self::Integer(value) => query.bind(*value),
            Self::Float(value) => query.bind(*value),
            Self::Text(value) => query.bind(value.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        Self::classify(value)
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(value) => Self::from(value),
            Value::Float(value) => Self::from(value),
            Value::Text(value) => Self::String(value),
        }
    }
}

/// Wire type of one bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// `i`
    Integer,
    /// `d`
    Float,
    /// `s`
    Text,
}

impl WireType {
    /// Single-character tag used in a [`TypeSignature`]
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Integer => 'i',
            Self::Float => 'd',
            Self::Text => 's',
        }
    }

    /// Parse a single-character tag
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'i' => Some(Self::Integer),
            'd' => Some(Self::Float),
            's' => Some(Self::Text),
            _ => None,
        }
    }
}

/// Ordered wire types of a parameter list, one tag per value (`"isd"`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeSignature(String);

impl TypeSignature {
    /// Signature describing `values`, in order
    #[must_use]
    pub fn from_values(values: &[Value]) -> Self {
        Self(values.iter().map(|value| value.wire_type().tag()).collect())
    }

    /// Signature as a tag string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of parameters described
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature describes no parameters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wire types in parameter order
    pub fn wire_types(&self) -> impl Iterator<Item = WireType> + '_ {
        self.0.chars().filter_map(WireType::from_tag)
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
