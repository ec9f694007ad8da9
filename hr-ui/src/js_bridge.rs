//! Typed wrappers around JS interop.
//!
//! The Chart.js glue lives in `assets/js/hr-charts.js` and is evaluated as
//! globals (no ES modules) once the page's `Chart` script has loaded. This
//! module provides Rust wrappers that serialize data, call those globals, and
//! fetch endpoint JSON.

use hr_core::chart::{ChartKind, ChartViewModel};
use hr_core::{HrError, Result};
use js_sys::{Function, Promise, Reflect};
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Embed the Chart.js glue at compile time
static HR_CHARTS_JS: &str = include_str!("../assets/js/hr-charts.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart glue with a wait-for-Chart.js polling loop.
///
/// The glue defines functions like `renderHrChart(...)` via `function`
/// declarations. To make them global (not block-scoped inside the
/// setInterval callback) they are evaluated with an indirect `eval()` once
/// `Chart` is defined, then promoted to `window.*` explicitly.
///
/// Safe to call from every widget: only the first call installs anything.
/// `window.__hrChartsReady` is a promise that resolves once the glue is live.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__hrChartsReady) {{ window.__hrChartScripts = {}; }}",
        serde_json::to_string(HR_CHARTS_JS).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__hrChartsReady) { return; }
            window.__hrChartsReady = new Promise(function(resolve) {
                var waitForChart = setInterval(function() {
                    if (typeof Chart !== 'undefined') {
                        clearInterval(waitForChart);
                        // Eval at global scope via indirect eval
                        (0, eval)(window.__hrChartScripts);
                        delete window.__hrChartScripts;
                        if (typeof renderHrChart !== 'undefined') window.renderHrChart = renderHrChart;
                        if (typeof updateHrChart !== 'undefined') window.updateHrChart = updateHrChart;
                        if (typeof setHrChartType !== 'undefined') window.setHrChartType = setHrChartType;
                        console.log('HR charts initialized');
                        resolve(true);
                    }
                }, 100);
            });
        })();
    "#;
    call_js(init_js);
}

/// Wait until [`init_charts`] has finished installing the glue.
pub async fn charts_ready() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| HrError::MissingElement("window".into()))?;
    let ready = Reflect::get(&window, &JsValue::from_str("__hrChartsReady")).map_err(bridge_error)?;
    let promise: Promise = ready
        .dyn_into()
        .map_err(|_| HrError::Bridge("init_charts() has not been called".into()))?;
    JsFuture::from(promise).await.map_err(bridge_error)?;
    Ok(())
}

/// Construct a chart on the canvas `canvas_id`.
///
/// `on_point` receives `(label, dataset_label)` for clicks that land on a
/// data point. Returns the Chart.js instance.
pub fn render_chart(
    canvas_id: &str,
    config: &Value,
    on_point: &Closure<dyn FnMut(String, JsValue)>,
) -> Result<JsValue> {
    let render = global_function("renderHrChart")?;
    let config_json = serde_json::to_string(config)?;
    render
        .call3(
            &JsValue::NULL,
            &JsValue::from_str(canvas_id),
            &JsValue::from_str(&config_json),
            on_point.as_ref(),
        )
        .map_err(bridge_error)
}

/// Replace a rendered chart's labels and datasets, then re-render it.
pub fn update_chart(chart: &JsValue, view: &ChartViewModel) -> Result<()> {
    let update = global_function("updateHrChart")?;
    let view_json = serde_json::to_string(view)?;
    update
        .call2(&JsValue::NULL, chart, &JsValue::from_str(&view_json))
        .map_err(bridge_error)?;
    Ok(())
}

/// Switch a rendered chart's type, then re-render it.
pub fn set_chart_kind(chart: &JsValue, kind: ChartKind) -> Result<()> {
    let set_type = global_function("setHrChartType")?;
    set_type
        .call2(&JsValue::NULL, chart, &JsValue::from_str(kind.as_str()))
        .map_err(bridge_error)?;
    Ok(())
}

/// GET `url` and decode the JSON body.
///
/// Sends `X-Requested-With: XMLHttpRequest` so the server treats it as an
/// AJAX call.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let window = web_sys::window().ok_or_else(|| HrError::MissingElement("window".into()))?;
    let fetch_error = |e: JsValue| HrError::Fetch {
        url: url.to_string(),
        reason: describe(&e),
    };

    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(fetch_error)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(fetch_error)?;
    headers
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(fetch_error)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_error)?
        .dyn_into()
        .map_err(fetch_error)?;
    if !response.ok() {
        return Err(HrError::Http {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?
        .as_string()
        .unwrap_or_default();
    Ok(serde_json::from_str(&body)?)
}

fn global_function(name: &str) -> Result<Function> {
    let window = web_sys::window().ok_or_else(|| HrError::MissingElement("window".into()))?;
    Reflect::get(&window, &JsValue::from_str(name))
        .map_err(bridge_error)?
        .dyn_into()
        .map_err(|_| HrError::Bridge(format!("window.{name} is not a function")))
}

fn bridge_error(e: JsValue) -> HrError {
    HrError::Bridge(describe(&e))
}

fn describe(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
