// ABOUTME: Named-value context handed to a single template render
// ABOUTME: Keys are unique; values are arbitrary JSON-shaped data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::btree_map::Iter;
use std::collections::BTreeMap;

/// Variables visible to a template, and nothing else
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateContext(BTreeMap<String, JsonValue>);

impl TemplateContext {
    /// Empty context
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder form of [`insert`](Self::insert) accepting any serializable value.
    ///
    /// A value that fails to serialize is stored as `null` and renders as
    /// empty text.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        self.0.insert(key.into(), value);
        self
    }

    /// Set `key`, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Value bound to `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Number of bound names
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over bindings in key order
    pub fn iter(&self) -> Iter<'_, String, JsonValue> {
        self.0.iter()
    }

    /// Build a context from a JSON object; `None` for any other JSON value
    #[must_use]
    pub fn from_json_object(value: JsonValue) -> Option<Self> {
        match value {
            JsonValue::Object(map) => Some(map.into_iter().collect()),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for TemplateContext {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<BTreeMap<String, JsonValue>> for TemplateContext {
    fn from(map: BTreeMap<String, JsonValue>) -> Self {
        Self(map)
    }
}
