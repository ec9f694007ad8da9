//! Dashboard state managed via Dioxus context.
//!
//! `DashboardState` is provided once per app with `use_context_provider`;
//! chart cards and selectors retrieve it with `use_context::<DashboardState>()`.

use dioxus::prelude::*;
use hr_core::period::Period;

#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Period passed to widgets that take one (`?overall_leave=`)
    pub period: Signal<Period>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            period: Signal::new(Period::default()),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
