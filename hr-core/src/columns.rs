//! Column visibility controller.
//!
//! A table declares its columns through `data-cell-index` / `data-cell-title`
//! attributes on its cells. The controller turns those into a checkbox menu,
//! shows exactly the checked columns, and keeps the checked set in storage
//! under the table's `data-table-name` so it survives reloads.
//!
//! The controller talks to the page only through [`TableView`], so the same
//! reconciliation runs against the DOM in the browser and against
//! [`HeadlessTable`] natively.

use crate::selection::VisibilitySelection;
use crate::storage::{load_selection, save_selection, KeyValueStore, StoredSelection};
use serde::Serialize;
use std::collections::BTreeSet;

/// One displayable column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnDescriptor {
    /// Identifier of the column within its table (`data-cell-index`).
    pub index: String,
    /// Human-readable header (`data-cell-title`).
    pub title: String,
}

impl ColumnDescriptor {
    pub fn new(index: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            title: title.into(),
        }
    }
}

/// The page-side view of one table.
pub trait TableView {
    /// Storage key for this table (`data-table-name`).
    fn name(&self) -> &str;

    /// Every titled cell under the table, in document order.
    fn columns(&self) -> Vec<ColumnDescriptor>;

    /// The `data-cell-index` of every cell under the table, in document order.
    fn cell_indices(&self) -> Vec<String>;

    fn set_visible(&mut self, visible: bool);

    fn hide_all_cells(&mut self);

    fn show_all_cells(&mut self);

    /// Show every cell whose column index is `index`.
    fn show_cells(&mut self, index: &str);
}

/// Reduce titled cells to one descriptor per distinct index, first wins.
pub fn distinct_columns(columns: Vec<ColumnDescriptor>) -> Vec<ColumnDescriptor> {
    let mut seen = BTreeSet::new();
    columns
        .into_iter()
        .filter(|c| seen.insert(c.index.clone()))
        .collect()
}

/// One checkbox in the column menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub column: ColumnDescriptor,
    pub checked: bool,
}

/// Owns a table's checkbox menu and keeps page, menu and storage in step.
pub struct ColumnController<T, S> {
    table: T,
    store: S,
    items: Vec<MenuItem>,
}

impl<T: TableView, S: KeyValueStore> ColumnController<T, S> {
    /// Build the menu for `table` and reconcile it with the stored selection.
    ///
    /// - non-empty stored selection: exactly those columns are checked and
    ///   shown; stored indices with no checkbox are dropped from storage
    /// - stored but empty selection: every column is checked and shown
    /// - nothing usable stored: every column is checked and shown, and the
    ///   full index set of the table is written as the new default
    pub fn initialize(table: T, store: S) -> Self {
        let items = distinct_columns(table.columns())
            .into_iter()
            .map(|column| MenuItem {
                column,
                checked: false,
            })
            .collect();
        let mut controller = Self {
            table,
            store,
            items,
        };
        controller.reconcile();
        controller
    }

    fn reconcile(&mut self) {
        let stored = load_selection(&self.store, self.table.name());

        if matches!(stored, StoredSelection::Present(_)) {
            self.table.set_visible(false);
            self.table.hide_all_cells();
        } else {
            self.table.set_visible(true);
            self.table.show_all_cells();
        }

        match stored {
            StoredSelection::Present(selection) => {
                log::info!(
                    "[HR] columns: restoring {} stored columns for {}",
                    selection.len(),
                    self.table.name()
                );
                self.set_all(false);
                for index in selection.iter() {
                    let checked = self.set_checked(index, true);
                    self.apply_toggle(index, checked);
                }
            }
            StoredSelection::Empty => {
                self.set_all(true);
                self.apply_each(true);
            }
            StoredSelection::Absent => {
                self.set_all(true);
                let all = VisibilitySelection::from_indices(self.table.cell_indices());
                if !all.is_empty() {
                    log::info!(
                        "[HR] columns: saving default of {} columns for {}",
                        all.len(),
                        self.table.name()
                    );
                    save_selection(&mut self.store, self.table.name(), &all);
                }
                self.apply_each(true);
            }
        }

        self.table.set_visible(true);
    }

    /// Set one checkbox and apply the change. Unknown indices are ignored.
    pub fn toggle(&mut self, index: &str, checked: bool) {
        if !self.items.iter().any(|item| item.column.index == index) {
            log::warn!(
                "[HR] columns: no column {index} in menu for {}",
                self.table.name()
            );
            return;
        }
        self.set_checked(index, checked);
        self.apply_toggle(index, checked);
    }

    /// Check every box, then fire one toggle per box in menu order.
    pub fn select_all(&mut self) {
        self.set_all(true);
        self.apply_each(true);
    }

    /// Uncheck every box, then fire one toggle per box in menu order.
    pub fn unselect_all(&mut self) {
        self.set_all(false);
        self.apply_each(false);
    }

    fn apply_each(&mut self, checked: bool) {
        let indices: Vec<String> = self.items.iter().map(|i| i.column.index.clone()).collect();
        for index in &indices {
            self.apply_toggle(index, checked);
        }
    }

    /// Re-apply visibility from the menu and record the toggled index.
    fn apply_toggle(&mut self, index: &str, checked: bool) {
        self.table.hide_all_cells();
        for item in self.items.iter().filter(|item| item.checked) {
            self.table.show_cells(&item.column.index);
        }

        let mut stored = load_selection(&self.store, self.table.name()).into_selection();
        if checked {
            stored.insert(index);
            save_selection(&mut self.store, self.table.name(), &stored);
        } else if stored.remove(index) {
            save_selection(&mut self.store, self.table.name(), &stored);
        }

        self.table.set_visible(true);
    }

    /// Returns whether a checkbox with that index exists.
    fn set_checked(&mut self, index: &str, checked: bool) -> bool {
        match self.items.iter_mut().find(|item| item.column.index == index) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    fn set_all(&mut self, checked: bool) {
        for item in &mut self.items {
            item.checked = checked;
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Indices of the checked boxes, in menu order.
    pub fn checked_indices(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.column.index.clone())
            .collect()
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (T, S) {
        (self.table, self.store)
    }
}

/// A table held in memory: the native stand-in for a DOM table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessTable {
    name: String,
    cells: Vec<ColumnDescriptor>,
    shown: BTreeSet<String>,
    visible: bool,
    /// Every `set_visible` call, in order.
    pub visibility_log: Vec<bool>,
}

impl HeadlessTable {
    /// A table with one header cell per column.
    pub fn new(name: &str, columns: &[(&str, &str)]) -> Self {
        let cells: Vec<ColumnDescriptor> = columns
            .iter()
            .map(|(index, title)| ColumnDescriptor::new(*index, *title))
            .collect();
        let shown = cells.iter().map(|c| c.index.clone()).collect();
        Self {
            name: name.to_string(),
            cells,
            shown,
            visible: true,
            visibility_log: Vec::new(),
        }
    }

    /// Columns whose cells are currently shown, in column order.
    pub fn visible_columns(&self) -> Vec<String> {
        distinct_columns(self.cells.clone())
            .into_iter()
            .map(|c| c.index)
            .filter(|index| self.shown.contains(index))
            .collect()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl TableView for HeadlessTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> Vec<ColumnDescriptor> {
        self.cells.clone()
    }

    fn cell_indices(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.index.clone()).collect()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.visibility_log.push(visible);
    }

    fn hide_all_cells(&mut self) {
        self.shown.clear();
    }

    fn show_all_cells(&mut self) {
        self.shown = self.cells.iter().map(|c| c.index.clone()).collect();
    }

    fn show_cells(&mut self, index: &str) {
        if self.cells.iter().any(|c| c.index == index) {
            self.shown.insert(index.to_string());
        }
    }
}
