//! Employee dashboard
//!
//! Three charts on the employee dashboard page:
//! - total employees (active vs inactive) doughnut; clicking the title
//!   cycles its chart type
//! - gender doughnut
//! - department stacked bar
//!
//! Each chart fetches its endpoint once on mount. Clicking a segment or bar
//! opens the employee list filtered to it.

use dioxus::prelude::*;
use hr_core::widgets;
use hr_ui::components::ChartCard;
use hr_ui::state::DashboardState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("employee-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(DashboardState::new);
    log::info!("[HR] employee dashboard mounted");

    rsx! {
        div {
            class: "oh-dashboard__cards",
            ChartCard {
                spec: &widgets::TOTAL_EMPLOYEES,
                title: "Total Employees".to_string(),
                cycle_on_title: true,
            }
            ChartCard {
                spec: &widgets::GENDER,
                title: "Gender Chart".to_string(),
            }
            ChartCard {
                spec: &widgets::DEPARTMENT,
                title: "Department Chart".to_string(),
                min_height: 350,
            }
        }
    }
}
