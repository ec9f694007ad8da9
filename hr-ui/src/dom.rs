//! web-sys implementation of [`TableView`].
//!
//! A table is found by element id and must carry `data-table-name`. Its
//! columns are the `[data-cell-title]` / `[data-cell-index]` cells under any
//! element with that table name; show/hide toggles inline `display` the way
//! jQuery's `.show()` / `.hide()` do.

use hr_core::columns::{ColumnDescriptor, TableView};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// A server-rendered table on the current page.
pub struct DomTable {
    name: String,
    root: Element,
    document: Document,
}

impl DomTable {
    /// Find the table with id `table_id`. `None` if it is missing or has no
    /// `data-table-name`.
    pub fn locate(table_id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let root = document.get_element_by_id(table_id)?;
        let name = root.get_attribute("data-table-name")?;
        Some(Self {
            name,
            root,
            document,
        })
    }

    fn cells(&self, attribute: &str, value: Option<&str>) -> Vec<Element> {
        let selector = match value {
            Some(value) => format!(
                "[data-table-name=\"{}\"] [{}=\"{}\"]",
                css_escape(&self.name),
                attribute,
                css_escape(value)
            ),
            None => format!("[data-table-name=\"{}\"] [{}]", css_escape(&self.name), attribute),
        };
        query_all(&self.document, &selector)
    }
}

impl TableView for DomTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> Vec<ColumnDescriptor> {
        self.cells("data-cell-title", None)
            .into_iter()
            .filter_map(|cell| {
                let index = cell.get_attribute("data-cell-index")?;
                let title = cell.get_attribute("data-cell-title").unwrap_or_default();
                Some(ColumnDescriptor::new(index, title))
            })
            .collect()
    }

    fn cell_indices(&self) -> Vec<String> {
        self.cells("data-cell-index", None)
            .into_iter()
            .filter_map(|cell| cell.get_attribute("data-cell-index"))
            .collect()
    }

    fn set_visible(&mut self, visible: bool) {
        set_display(&self.root, visible);
    }

    fn hide_all_cells(&mut self) {
        for cell in self.cells("data-cell-index", None) {
            set_display(&cell, false);
        }
    }

    fn show_all_cells(&mut self) {
        for cell in self.cells("data-cell-index", None) {
            set_display(&cell, true);
        }
    }

    fn show_cells(&mut self, index: &str) {
        for cell in self.cells("data-cell-index", Some(index)) {
            set_display(&cell, true);
        }
    }
}

/// Read an attribute from the element with id `element_id`.
pub fn element_attribute(element_id: &str, attribute: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(element_id)?
        .get_attribute(attribute)
}

/// Whether an element with id `element_id` is on the page.
pub fn element_exists(element_id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .is_some()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[HR] dom: bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_display(element: &Element, visible: bool) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let result = if visible {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
    if let Err(e) = result {
        log::warn!("[HR] dom: failed to toggle display: {:?}", e);
    }
}

/// Escape a value for use inside a double-quoted CSS attribute selector.
fn css_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
