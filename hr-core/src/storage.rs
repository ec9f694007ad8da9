//! Durable key/value storage used by the widgets.
//!
//! In the browser this is `window.localStorage`; natively and in tests it is
//! [`MemoryStore`]. Keys are table names for column selections, plus
//! [`SAVED_FILTERS_KEY`] which the list views use for their filter state.

use crate::selection::VisibilitySelection;
use std::collections::BTreeMap;

/// Key under which the list views remember their last filter form.
pub const SAVED_FILTERS_KEY: &str = "savedFilters";

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// What a table's storage entry held when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredSelection {
    /// No entry, the literal `"[]"`, or an undecodable value.
    Absent,
    /// A decodable entry with no indices in it.
    Empty,
    /// A non-empty selection.
    Present(VisibilitySelection),
}

impl StoredSelection {
    /// Collapse to a selection, treating absent as empty.
    pub fn into_selection(self) -> VisibilitySelection {
        match self {
            StoredSelection::Present(selection) => selection,
            StoredSelection::Absent | StoredSelection::Empty => VisibilitySelection::new(),
        }
    }
}

/// Read the visibility selection stored for `table`.
pub fn load_selection<S: KeyValueStore + ?Sized>(store: &S, table: &str) -> StoredSelection {
    let Some(raw) = store.get(table) else {
        return StoredSelection::Absent;
    };
    if raw.trim() == "[]" {
        return StoredSelection::Absent;
    }
    match VisibilitySelection::decode(&raw) {
        Some(selection) if selection.is_empty() => StoredSelection::Empty,
        Some(selection) => StoredSelection::Present(selection),
        None => {
            log::warn!("[HR] storage: ignoring malformed column selection for {table}: {raw}");
            StoredSelection::Absent
        }
    }
}

/// Persist the visibility selection for `table`.
pub fn save_selection<S: KeyValueStore + ?Sized>(
    store: &mut S,
    table: &str,
    selection: &VisibilitySelection,
) {
    store.set(table, &selection.encode());
}

/// In-memory store for native use and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for seeding a store.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_entry_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(load_selection(&store, "employees"), StoredSelection::Absent);
    }

    #[test]
    fn load_literal_empty_array_is_absent() {
        let store = MemoryStore::new().with("employees", "[]");
        assert_eq!(load_selection(&store, "employees"), StoredSelection::Absent);
    }

    #[test]
    fn load_spaced_empty_array_is_empty() {
        let store = MemoryStore::new().with("employees", "[ ]");
        assert_eq!(load_selection(&store, "employees"), StoredSelection::Empty);
    }

    #[test]
    fn load_malformed_entry_is_absent() {
        let store = MemoryStore::new().with("employees", "[\"1\",");
        assert_eq!(load_selection(&store, "employees"), StoredSelection::Absent);
    }

    #[test]
    fn save_then_load_returns_selection() {
        let mut store = MemoryStore::new();
        let selection = VisibilitySelection::from_indices(["2", "5"]);
        save_selection(&mut store, "employees", &selection);
        assert_eq!(store.get("employees").as_deref(), Some(r#"["2","5"]"#));
        assert_eq!(
            load_selection(&store, "employees"),
            StoredSelection::Present(selection)
        );
    }

    #[test]
    fn selections_are_scoped_per_table() {
        let store = MemoryStore::new().with("employees", r#"["1"]"#);
        assert_eq!(load_selection(&store, "leaves"), StoredSelection::Absent);
    }

    #[test]
    fn remove_deletes_entry() {
        let mut store = MemoryStore::new().with(SAVED_FILTERS_KEY, "{}");
        store.remove(SAVED_FILTERS_KEY);
        assert!(store.is_empty());
    }
}
