//! Shared Dioxus components and Chart.js bridge for the HR dashboard apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js glue and JSON fetches
//! - `dom`, `storage`, `navigation`: web-sys backed implementations of the
//!   `hr-core` table, storage and navigation traits
//! - `surface`: the Chart.js [`hr_core::loader::ChartSurface`]
//! - `state`: reactive dashboard state with Dioxus Signals
//! - `components`: reusable RSX components (chart cards, selectors, menus)

pub mod components;
pub mod dom;
pub mod js_bridge;
pub mod navigation;
pub mod state;
pub mod storage;
pub mod surface;
