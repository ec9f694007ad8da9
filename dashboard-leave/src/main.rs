//! Leave dashboard
//!
//! Overall leave by department for a chosen period. Changing the period
//! re-fetches `/leave/overall-leave?overall_leave=<period>` and updates the
//! same chart in place. Clicking a segment opens the leave requests for that
//! department and period.

use dioxus::prelude::*;
use hr_core::widgets;
use hr_ui::components::ChartCard;
use hr_ui::state::DashboardState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("leave-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(DashboardState::new);

    rsx! {
        ChartCard {
            spec: &widgets::OVERALL_LEAVE,
            title: "Overall Leave".to_string(),
        }
    }
}
