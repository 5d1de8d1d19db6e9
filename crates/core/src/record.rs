//! Column-label to value records.

use indexmap::IndexMap;
use serde::Serialize;

/// One extracted table row, keyed by column label.
///
/// Keys keep the order they were first inserted in, which is the column
/// order of the table they came from. A label that is absent means
/// "unknown"; it is never filled with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    entries: IndexMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `label` to `value`, replacing an existing value in place.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(label.into(), value.into());
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Labels in column order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
