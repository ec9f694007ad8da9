//! Fetch chart endpoints the way the dashboard does.

use anyhow::Context;
use hr_core::chart::{chart_config, ChartResponse, ChartViewModel, EMPTY_CHART_TEXT};
use hr_core::filter::ChartClick;
use hr_core::period::Period;
use hr_core::widgets::{self, WidgetSpec};
use hr_core::HrError;
use log::{info, warn};
use serde_json::Value;
use std::time::Duration;

fn lookup(name: &str) -> Result<&'static WidgetSpec, HrError> {
    widgets::find(name).ok_or_else(|| HrError::UnknownWidget(name.to_string()))
}

/// Fetch `widget`'s endpoint from `base_url` and print its Chart.js config.
pub async fn run_chart(widget: &str, base_url: &str, period: &str) -> anyhow::Result<()> {
    let spec = lookup(widget)?;
    let url = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        spec.request_path(&Period::new(period))
    );
    info!("GET {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HrError::Http {
            url,
            status: status.as_u16(),
        }
        .into());
    }

    let body = response.text().await?;
    let config = render_config(spec, &body)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Chart.js config for a raw endpoint response body.
pub fn render_config(spec: &WidgetSpec, body: &str) -> hr_core::Result<Value> {
    let view = ChartViewModel::build(spec, ChartResponse::from_json(body)?);
    if view.is_empty() {
        warn!("{}: no data, chart shows \"{}\"", spec.name, EMPTY_CHART_TEXT);
    }
    Ok(chart_config(spec, spec.kind, &view))
}

/// URL a click on `label` in `widget` navigates to.
pub fn filter_url(widget: &str, label: &str, period: &str) -> Result<String, HrError> {
    let spec = lookup(widget)?;
    Ok(spec.filter.url(&ChartClick::new(label), &Period::new(period)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_body_renders_stacked_bar() {
        let config = render_config(
            &widgets::DEPARTMENT,
            r#"{"labels":["HR","Sales"],"dataSet":[{"label":"Employees","data":[2,7]}]}"#,
        )
        .unwrap();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"], serde_json::json!(["HR", "Sales"]));
        assert_eq!(config["options"]["scales"]["y"]["stacked"], true);
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
    }

    #[test]
    fn leave_body_with_bare_data_gets_default_label() {
        let config = render_config(
            &widgets::OVERALL_LEAVE,
            r#"{"labels":["HR"],"data":[4]}"#,
        )
        .unwrap();
        assert_eq!(config["data"]["datasets"][0]["label"], "Leave count");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = render_config(&widgets::GENDER, "<html>login</html>").unwrap_err();
        assert!(matches!(err, HrError::Decode(_)));
    }

    #[test]
    fn filter_url_uses_widget_target() {
        assert_eq!(
            filter_url("department", "R&D", "today").unwrap(),
            "/employee/employee-view?department=R%26D"
        );
        assert_eq!(
            filter_url("overall-leave", "HR", "week").unwrap(),
            "/leave/request-view?department_name=HR&overall_leave=week"
        );
    }

    #[test]
    fn unknown_widget_is_rejected() {
        assert!(matches!(
            filter_url("payroll", "x", "today"),
            Err(HrError::UnknownWidget(name)) if name == "payroll"
        ));
    }

    #[tokio::test]
    async fn run_chart_rejects_unknown_widget_before_fetching() {
        let err = run_chart("payroll", "http://127.0.0.1:9", "today")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("payroll"));
    }
}
