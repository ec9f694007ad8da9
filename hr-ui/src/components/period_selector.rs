//! Period dropdown for the overall-leave chart.

use crate::state::DashboardState;
use dioxus::prelude::*;
use hr_core::period::Period;

/// Dropdown bound to [`DashboardState::period`].
///
/// Keeps the server page's `overAllLeaveSelect` id so existing styles apply.
#[component]
pub fn PeriodSelector() -> Element {
    let mut state = use_context::<DashboardState>();
    let current = (state.period)();

    let on_change = move |evt: Event<FormData>| {
        let period = Period::new(evt.value());
        log::info!("[HR] period changed to {}", period);
        state.period.set(period);
    };

    rsx! {
        select {
            id: "overAllLeaveSelect",
            class: "oh-select oh-select--sm",
            onchange: on_change,
            for (value, label) in Period::PRESETS {
                option {
                    value: value,
                    selected: current.as_str() == value,
                    "{label}"
                }
            }
        }
    }
}
