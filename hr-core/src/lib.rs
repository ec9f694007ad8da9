//! Column visibility and dashboard chart logic for the HR web UI.
//!
//! This crate holds everything that does not need a browser:
//! - `columns`: the column visibility controller and its [`columns::TableView`] seam
//! - `selection` / `storage`: the persisted per-table column selection
//! - `chart` / `palette` / `widgets`: chart view-models and Chart.js configs
//! - `loader`: chart widgets that own a rendered chart instance
//! - `filter` / `period`: click-to-filter navigation
//!
//! The browser glue in `hr-ui` implements the seams with web-sys; tests and
//! the CLI use the in-memory implementations here.
//!
//! # Usage
//!
//! ```rust
//! use hr_core::columns::{ColumnController, HeadlessTable};
//! use hr_core::storage::{KeyValueStore, MemoryStore};
//!
//! let table = HeadlessTable::new("employees", &[("1", "Name"), ("2", "Email")]);
//! let store = MemoryStore::new().with("employees", r#"["2"]"#);
//!
//! let mut controller = ColumnController::initialize(table, store);
//! assert_eq!(controller.table().visible_columns(), vec!["2"]);
//!
//! controller.toggle("1", true);
//! assert_eq!(controller.store().get("employees").as_deref(), Some(r#"["2","1"]"#));
//! ```

pub mod chart;
pub mod columns;
pub mod error;
pub mod filter;
pub mod loader;
pub mod palette;
pub mod period;
pub mod selection;
pub mod storage;
pub mod widgets;

pub use error::{HrError, Result};
