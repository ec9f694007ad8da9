//! Replay column visibility reconciliation natively.
//!
//! Useful for checking what a given localStorage value does to a table
//! without loading the page.

use anyhow::bail;
use hr_core::columns::{ColumnController, HeadlessTable};
use hr_core::storage::{KeyValueStore, MemoryStore};

/// Table state after load and toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    /// Visible column indices, in table order
    pub visible: Vec<String>,
    /// Stored value under the table name, if any
    pub stored: Option<String>,
}

/// Load `table` with `columns` against `stored`, then apply `toggles`.
///
/// Columns are `index` or `index:title`; toggles are `index=on|off`.
pub fn simulate(
    table: &str,
    columns: &[String],
    stored: Option<&str>,
    toggles: &[String],
) -> anyhow::Result<Simulation> {
    let columns: Vec<(&str, &str)> = columns
        .iter()
        .map(|column| {
            column
                .split_once(':')
                .unwrap_or((column.as_str(), column.as_str()))
        })
        .collect();

    let mut store = MemoryStore::new();
    if let Some(stored) = stored {
        store = store.with(table, stored);
    }

    let mut controller = ColumnController::initialize(HeadlessTable::new(table, &columns), store);
    for toggle in toggles {
        let (index, checked) = parse_toggle(toggle)?;
        controller.toggle(index, checked);
    }

    let (table_view, store) = controller.into_parts();
    Ok(Simulation {
        visible: table_view.visible_columns(),
        stored: store.get(table),
    })
}

fn parse_toggle(toggle: &str) -> anyhow::Result<(&str, bool)> {
    match toggle.split_once('=') {
        Some((index, "on")) => Ok((index, true)),
        Some((index, "off")) => Ok((index, false)),
        _ => bail!("toggle must be index=on or index=off, got {toggle:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_visit_stores_every_column() {
        let sim = simulate("emp", &cols(&["1:Name", "2:Email", "3:Badge"]), None, &[]).unwrap();
        assert_eq!(sim.visible, vec!["1", "2", "3"]);
        assert_eq!(sim.stored.as_deref(), Some(r#"["1","2","3"]"#));
    }

    #[test]
    fn stored_subset_and_toggles() {
        let sim = simulate(
            "emp",
            &cols(&["1", "2", "3"]),
            Some(r#"["3"]"#),
            &cols(&["1=on", "3=off"]),
        )
        .unwrap();
        assert_eq!(sim.visible, vec!["1"]);
        assert_eq!(sim.stored.as_deref(), Some(r#"["1"]"#));
    }

    #[test]
    fn bad_toggle_is_an_error() {
        assert!(simulate("emp", &cols(&["1"]), None, &cols(&["1=maybe"])).is_err());
    }
}
