//! Chart.js as a [`ChartSurface`].

use crate::{dom, js_bridge};
use hr_core::chart::{ChartKind, ChartViewModel};
use hr_core::filter::ChartClick;
use hr_core::loader::ChartSurface;
use hr_core::Result;
use serde_json::Value;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

type PointListener = Closure<dyn FnMut(String, JsValue)>;

/// Renders through `window.renderHrChart` and friends.
///
/// Every created chart gets a click listener that forwards point clicks to
/// `on_click`. Listeners are owned here and live as long as the surface.
pub struct ChartJsSurface {
    on_click: Rc<dyn Fn(ChartClick)>,
    listeners: Vec<PointListener>,
}

impl ChartJsSurface {
    pub fn new(on_click: impl Fn(ChartClick) + 'static) -> Self {
        Self {
            on_click: Rc::new(on_click),
            listeners: Vec::new(),
        }
    }
}

impl ChartSurface for ChartJsSurface {
    type Handle = JsValue;

    fn has_host(&self, element_id: &str) -> bool {
        dom::element_exists(element_id)
    }

    fn create(&mut self, element_id: &str, config: &Value) -> Result<JsValue> {
        let on_click = Rc::clone(&self.on_click);
        let listener = PointListener::new(move |label: String, dataset: JsValue| {
            on_click(ChartClick {
                label,
                dataset_label: dataset.as_string(),
            });
        });
        let chart = js_bridge::render_chart(element_id, config, &listener)?;
        self.listeners.push(listener);
        Ok(chart)
    }

    fn update(&mut self, handle: &JsValue, view: &ChartViewModel) -> Result<()> {
        js_bridge::update_chart(handle, view)
    }

    fn set_kind(&mut self, handle: &JsValue, kind: ChartKind) -> Result<()> {
        js_bridge::set_chart_kind(handle, kind)
    }
}
