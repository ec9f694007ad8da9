//! Chart view-model and Chart.js configuration.
//!
//! Endpoints answer with `{ "labels": [...], "dataSet": [{ "data": [...] }] }`
//! (or `{ "labels": [...], "data": [...] }` for the leave endpoint). A
//! [`ChartViewModel`] is built from that response plus the widget's static
//! styling, and [`chart_config`] turns it into the JSON object handed to
//! `new Chart(...)`.

use crate::error::Result;
use crate::widgets::WidgetSpec;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Chart.js chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Pie,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Pie => "pie",
        }
    }

    /// Next kind in the title-click cycle: line, bar, doughnut, pie, line.
    pub fn next(self) -> Self {
        match self {
            ChartKind::Line => ChartKind::Bar,
            ChartKind::Bar => ChartKind::Doughnut,
            ChartKind::Doughnut => ChartKind::Pie,
            ChartKind::Pie => ChartKind::Line,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dataset as sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Body of a chart data endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartResponse {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, rename = "dataSet")]
    pub data_set: Vec<DatasetSpec>,
    /// Single-series shape used by the leave endpoint.
    #[serde(default)]
    pub data: Vec<f64>,
}

impl ChartResponse {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The response's datasets, with a bare `data` array promoted to one
    /// unlabelled dataset.
    pub fn into_datasets(self) -> (Vec<String>, Vec<DatasetSpec>) {
        let datasets = if self.data_set.is_empty() && !self.data.is_empty() {
            vec![DatasetSpec {
                data: self.data,
                label: None,
            }]
        } else {
            self.data_set
        };
        (self.labels, datasets)
    }
}

/// Per-corner bar radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadius {
    pub top_left: u8,
    pub top_right: u8,
    pub bottom_left: u8,
    pub bottom_right: u8,
}

impl BorderRadius {
    pub fn top(radius: u8) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_left: 0,
            bottom_right: 0,
        }
    }
}

/// A dataset ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<String>,
}

/// Labels plus parallel datasets, as handed to Chart.js `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartViewModel {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartViewModel {
    /// Build the view-model for `spec` from a fresh response.
    ///
    /// The first dataset gets the widget palette; with bar styling every
    /// dataset gets top-rounded corners and a flat bottom edge.
    pub fn build(spec: &WidgetSpec, response: ChartResponse) -> Self {
        let (labels, specs) = response.into_datasets();
        let mut datasets: Vec<ChartDataset> = specs
            .into_iter()
            .map(|ds| ChartDataset {
                label: ds.label.or_else(|| spec.dataset_label.map(str::to_string)),
                data: ds.data,
                background_color: Vec::new(),
                border_radius: None,
                border_skipped: None,
            })
            .collect();

        if let Some(first) = datasets.first_mut() {
            first.background_color = spec.palette.colors();
        }

        if let Some(bar) = spec.bar {
            for ds in &mut datasets {
                ds.border_radius = Some(BorderRadius::top(bar.corner_radius));
                ds.border_skipped = Some("bottom".to_string());
            }
        }

        Self { labels, datasets }
    }

    /// True when there is nothing to draw: no labels, or only zeros.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
            || self
                .datasets
                .iter()
                .all(|ds| ds.data.iter().all(|v| *v == 0.0))
    }

    /// Values of the first dataset.
    pub fn values(&self) -> &[f64] {
        self.datasets.first().map(|ds| ds.data.as_slice()).unwrap_or(&[])
    }
}

/// Text drawn over a chart whose view-model is empty.
pub const EMPTY_CHART_TEXT: &str = "No data";

/// Full Chart.js configuration for `view` rendered as `kind`.
pub fn chart_config(spec: &WidgetSpec, kind: ChartKind, view: &ChartViewModel) -> Value {
    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "hrEmpty": { "text": EMPTY_CHART_TEXT },
        },
    });

    if let Some(bar) = spec.bar {
        let ticks = if bar.integer_ticks {
            json!({ "stepSize": 1, "precision": 0 })
        } else {
            json!({})
        };
        options["scales"] = json!({
            "x": { "stacked": bar.stacked },
            "y": {
                "beginAtZero": true,
                "stacked": bar.stacked,
                "ticks": ticks,
            },
        });
        if bar.hide_legend {
            options["plugins"]["legend"] = json!({ "display": false });
        }
    }

    if let Some(legend) = spec.legend {
        options["plugins"]["legend"] = json!({
            "position": legend.position,
            "labels": {
                "usePointStyle": true,
                "pointStyle": legend.point_style,
            },
        });
    }

    json!({
        "type": kind,
        "data": view,
        "options": options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets;

    fn response(raw: &str) -> ChartResponse {
        ChartResponse::from_json(raw).unwrap()
    }

    #[test]
    fn labels_and_values_keep_response_order() {
        let view = ChartViewModel::build(
            &widgets::TOTAL_EMPLOYEES,
            response(r#"{"labels":["A","B"],"dataSet":[{"data":[3,5]}]}"#),
        );
        assert_eq!(view.labels, vec!["A", "B"]);
        assert_eq!(view.values(), &[3.0, 5.0]);
    }

    #[test]
    fn first_dataset_gets_palette() {
        let view = ChartViewModel::build(
            &widgets::GENDER,
            response(
                r#"{"labels":["Male","Female","Other"],"dataSet":[{"label":"Employees","data":[4,3,1]}]}"#,
            ),
        );
        assert_eq!(
            view.datasets[0].background_color,
            vec!["#8c52ff", "#bea1f7", "#5e17eb"]
        );
        assert_eq!(view.datasets[0].label.as_deref(), Some("Employees"));
    }

    #[test]
    fn bar_styling_applies_to_every_dataset() {
        let view = ChartViewModel::build(
            &widgets::DEPARTMENT,
            response(
                r#"{"labels":["HR","IT"],"dataSet":[{"label":"Active","data":[2,4]},{"label":"Inactive","data":[1,0]}]}"#,
            ),
        );
        assert_eq!(view.datasets.len(), 2);
        for ds in &view.datasets {
            assert_eq!(ds.border_radius, Some(BorderRadius::top(8)));
            assert_eq!(ds.border_skipped.as_deref(), Some("bottom"));
        }
        assert_eq!(view.datasets[0].background_color, vec!["#8C52FF"]);
        assert!(view.datasets[1].background_color.is_empty());
    }

    #[test]
    fn bare_data_array_becomes_default_labelled_dataset() {
        let view = ChartViewModel::build(
            &widgets::OVERALL_LEAVE,
            response(r#"{"labels":["HR","Sales"],"data":[2,1]}"#),
        );
        assert_eq!(view.datasets.len(), 1);
        assert_eq!(view.datasets[0].label.as_deref(), Some("Leave count"));
        assert_eq!(view.values(), &[2.0, 1.0]);
        assert_eq!(view.datasets[0].background_color.len(), 6);
    }

    #[test]
    fn missing_fields_decode_to_empty_view() {
        let view = ChartViewModel::build(&widgets::TOTAL_EMPLOYEES, response("{}"));
        assert!(view.labels.is_empty());
        assert!(view.datasets.is_empty());
        assert!(view.is_empty());
    }

    #[test]
    fn all_zero_values_are_empty() {
        let view = ChartViewModel::build(
            &widgets::TOTAL_EMPLOYEES,
            response(r#"{"labels":["Active","Inactive"],"dataSet":[{"data":[0,0]}]}"#),
        );
        assert!(view.is_empty());
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        assert!(ChartResponse::from_json("<html>").is_err());
    }

    #[test]
    fn bar_config_forces_integer_stacked_axes() {
        let view = ChartViewModel::build(
            &widgets::DEPARTMENT,
            response(r#"{"labels":["HR"],"dataSet":[{"data":[1]}]}"#),
        );
        let config = chart_config(&widgets::DEPARTMENT, ChartKind::Bar, &view);
        assert_eq!(config["type"], "bar");
        assert_eq!(config["options"]["scales"]["x"]["stacked"], true);
        assert_eq!(config["options"]["scales"]["y"]["stacked"], true);
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(config["options"]["scales"]["y"]["ticks"]["stepSize"], 1);
        assert_eq!(config["options"]["scales"]["y"]["ticks"]["precision"], 0);
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(
            config["data"]["datasets"][0]["borderRadius"]["topLeft"],
            8
        );
        assert_eq!(config["data"]["datasets"][0]["borderSkipped"], "bottom");
    }

    #[test]
    fn doughnut_config_has_no_scales() {
        let view = ChartViewModel::build(
            &widgets::GENDER,
            response(r#"{"labels":["Male"],"dataSet":[{"data":[1]}]}"#),
        );
        let config = chart_config(&widgets::GENDER, ChartKind::Doughnut, &view);
        assert_eq!(config["type"], "doughnut");
        assert!(config["options"].get("scales").is_none());
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "bottom");
        assert_eq!(
            config["options"]["plugins"]["legend"]["labels"]["pointStyle"],
            "circle"
        );
        assert_eq!(config["data"]["labels"][0], "Male");
    }

    #[test]
    fn kind_cycle_visits_every_kind() {
        let mut kind = ChartKind::Line;
        let mut seen = Vec::new();
        for _ in 0..4 {
            kind = kind.next();
            seen.push(kind);
        }
        assert_eq!(
            seen,
            vec![
                ChartKind::Bar,
                ChartKind::Doughnut,
                ChartKind::Pie,
                ChartKind::Line
            ]
        );
    }
}
