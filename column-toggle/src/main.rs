//! Column toggle menu
//!
//! Mounts under `#column-toggle-root`, whose `data-table-id` names the table
//! element to control. The menu remembers the visible columns per table
//! (`data-table-name`) in localStorage.

use anyhow::Context;
use dioxus::prelude::*;
use hr_ui::components::ColumnToggleMenu;
use hr_ui::dom;

const ROOT_ID: &str = "column-toggle-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

/// Id of the table this menu controls.
fn target_table_id() -> anyhow::Result<String> {
    dom::element_attribute(ROOT_ID, "data-table-id")
        .filter(|id| !id.is_empty())
        .with_context(|| format!("#{ROOT_ID} has no data-table-id"))
}

#[component]
fn App() -> Element {
    let table_id = use_hook(|| match target_table_id() {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("[HR] columns: {e:#}");
            None
        }
    });

    rsx! {
        if let Some(table_id) = table_id {
            ColumnToggleMenu { table_id }
        }
    }
}
