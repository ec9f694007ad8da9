//! Card hosting one dashboard chart.

use super::{LoadingSpinner, PeriodSelector};
use crate::js_bridge;
use crate::navigation::open_filtered_list;
use crate::state::DashboardState;
use crate::surface::ChartJsSurface;
use dioxus::prelude::*;
use hr_core::chart::ChartResponse;
use hr_core::filter::ChartClick;
use hr_core::loader::ChartWidget;
use hr_core::period::Period;
use hr_core::widgets::WidgetSpec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// Widget to fetch and render
    pub spec: &'static WidgetSpec,
    /// Card title
    pub title: String,
    /// Clicking the title cycles line → bar → doughnut → pie
    #[props(default = false)]
    pub cycle_on_title: bool,
    /// Canvas container height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A titled card with a `<canvas>` whose id is the widget's element id.
///
/// Fetches on mount, and again whenever the dashboard period changes if the
/// widget takes a period. Later fetches update the same chart instance.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let spec = props.spec;
    let state = use_context::<DashboardState>();
    let mut widget = use_signal(|| ChartWidget::<JsValue>::new(spec));
    let mut loading = use_signal(|| true);

    let surface = use_hook(move || {
        let target = spec.filter;
        Rc::new(RefCell::new(ChartJsSurface::new(move |click: ChartClick| {
            let period = state.period.peek().clone();
            open_filtered_list(target, &click, &period);
        })))
    });

    let fetch_surface = surface.clone();
    use_effect(move || {
        // Only period-aware widgets subscribe to the period signal.
        let period = if spec.period_param.is_some() {
            (state.period)()
        } else {
            Period::default()
        };
        let surface = fetch_surface.clone();

        spawn(async move {
            js_bridge::init_charts();
            if let Err(e) = js_bridge::charts_ready().await {
                log::error!("[HR] chart {}: Chart.js unavailable: {}", spec.name, e);
                return;
            }
            let path = spec.request_path(&period);
            log::info!("[HR] chart {}: GET {}", spec.name, path);
            let result = js_bridge::fetch_json::<ChartResponse>(&path).await;
            let outcome = widget
                .write()
                .apply_result(&mut *surface.borrow_mut(), result);
            log::debug!("[HR] chart {}: {:?}", spec.name, outcome);
            loading.set(false);
        });
    });

    let cycle_on_title = props.cycle_on_title;
    let on_title = move |_| {
        if !cycle_on_title {
            return;
        }
        if let Some(kind) = widget.write().cycle_kind(&mut *surface.borrow_mut()) {
            log::info!("[HR] chart {}: switched to {}", spec.name, kind);
        }
    };

    let title_style = if cycle_on_title { "cursor: pointer;" } else { "" };
    let body_style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            class: "oh-card-dashboard",
            div {
                class: "oh-card-dashboard__header",
                span {
                    class: "oh-card-dashboard__title",
                    style: "{title_style}",
                    onclick: on_title,
                    "{props.title}"
                }
                if spec.period_param.is_some() {
                    PeriodSelector {}
                }
            }
            div {
                class: "oh-card-dashboard__body",
                style: "{body_style}",
                if loading() {
                    LoadingSpinner {}
                }
                canvas { id: "{spec.element_id}" }
            }
        }
    }
}
