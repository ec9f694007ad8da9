//! Column visibility menu for a server-rendered table.

use crate::dom::DomTable;
use crate::storage::LocalStore;
use dioxus::prelude::*;
use hr_core::columns::{ColumnController, MenuItem};

type Controller = ColumnController<DomTable, LocalStore>;

#[derive(Props, Clone, PartialEq)]
pub struct ColumnToggleMenuProps {
    /// Element id of the table whose columns are toggled
    pub table_id: String,
}

/// Bulk buttons plus one checkbox per table column.
///
/// The table is located and reconciled with localStorage once, after the
/// first render. A missing table leaves the menu empty.
#[component]
pub fn ColumnToggleMenu(props: ColumnToggleMenuProps) -> Element {
    let mut controller: Signal<Option<Controller>> = use_signal(|| None);

    let table_id = props.table_id.clone();
    use_effect(move || match DomTable::locate(&table_id) {
        Some(table) => {
            log::info!("[HR] columns: initializing #{}", table_id);
            controller.set(Some(ColumnController::initialize(table, LocalStore)));
        }
        None => log::warn!("[HR] columns: no table #{} with data-table-name", table_id),
    });

    let items: Vec<MenuItem> = controller
        .read()
        .as_ref()
        .map(|c| c.items().to_vec())
        .unwrap_or_default();

    let on_select_all = move |_| {
        if let Some(c) = controller.write().as_mut() {
            c.select_all();
        }
    };
    let on_unselect_all = move |_| {
        if let Some(c) = controller.write().as_mut() {
            c.unselect_all();
        }
    };

    rsx! {
        div {
            class: "oh-dropdown_btn-header",
            button {
                class: "oh-btn oh-btn--light-bkg",
                onclick: on_select_all,
                "Select All Columns"
            }
            button {
                class: "oh-btn oh-btn--light-bkg",
                onclick: on_unselect_all,
                "Unselect All Columns"
            }
        }
        ul {
            class: "oh-dropdown_items",
            for item in items {
                ColumnMenuItem {
                    key: "{item.column.index}",
                    index: item.column.index.clone(),
                    title: item.column.title.clone(),
                    checked: item.checked,
                    on_toggle: move |(index, checked): (String, bool)| {
                        if let Some(c) = controller.write().as_mut() {
                            c.toggle(&index, checked);
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ColumnMenuItemProps {
    pub index: String,
    pub title: String,
    pub checked: bool,
    /// Called with `(index, checked)` when the box changes
    pub on_toggle: EventHandler<(String, bool)>,
}

#[component]
pub fn ColumnMenuItem(props: ColumnMenuItemProps) -> Element {
    let index = props.index.clone();
    let on_toggle = props.on_toggle;

    rsx! {
        li {
            class: "oh-dropdown_item",
            label {
                class: "oh-label oh-label--flex",
                input {
                    r#type: "checkbox",
                    class: "oh-table__toggle-child",
                    "data-column-index": "{props.index}",
                    checked: props.checked,
                    onchange: move |evt: Event<FormData>| on_toggle.call((index.clone(), evt.checked())),
                }
                "{props.title}"
            }
        }
    }
}
