//! The persisted set of visible column indices for one table.
//!
//! Stored as a JSON array of strings, e.g. `["1","3","4"]`. Order is the
//! order in which columns were first made visible; duplicates never appear.

use serde::Serialize;
use serde_json::Value;

/// Ordered set of column indices that are currently visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VisibilitySelection(Vec<String>);

impl VisibilitySelection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a selection from indices, keeping the first occurrence of each.
    pub fn from_indices<I, S>(indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for index in indices {
            let index = index.into();
            if !selection.contains(&index) {
                selection.0.push(index);
            }
        }
        selection
    }

    /// Decode a stored value.
    ///
    /// Accepts a JSON array whose entries are strings or numbers (numbers are
    /// kept as their decimal text). Anything else yields `None`.
    pub fn decode(raw: &str) -> Option<Self> {
        let entries: Vec<Value> = serde_json::from_str(raw).ok()?;
        let mut indices = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                Value::String(s) => indices.push(s),
                Value::Number(n) => indices.push(n.to_string()),
                _ => return None,
            }
        }
        Some(Self::from_indices(indices))
    }

    /// Encode for storage as a JSON array of strings.
    pub fn encode(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Add an index. Returns false if it was already present.
    pub fn insert(&mut self, index: &str) -> bool {
        if self.contains(index) {
            return false;
        }
        self.0.push(index.to_string());
        true
    }

    /// Remove an index. Returns false if it was not present.
    pub fn remove(&mut self, index: &str) -> bool {
        match self.0.iter().position(|i| i == index) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, index: &str) -> bool {
        self.0.iter().any(|i| i == index)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
