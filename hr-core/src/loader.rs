//! Dashboard chart widgets.
//!
//! A [`ChartWidget`] owns one chart's view-model and its rendered instance.
//! Fetching happens elsewhere; [`ChartWidget::apply`] is the single place a
//! response becomes a view-model and reaches the renderer:
//!
//! - first successful response: the chart is created, if its host element
//!   is on the page
//! - later responses: the existing instance's data is replaced in place and
//!   re-rendered; no second instance is ever created
//! - failed fetches: logged, the widget keeps whatever it last showed

use crate::chart::{chart_config, ChartKind, ChartResponse, ChartViewModel};
use crate::error::Result;
use crate::widgets::WidgetSpec;
use serde_json::Value;

/// The charting engine, as seen by a widget.
pub trait ChartSurface {
    /// Rendered chart instance.
    type Handle;

    /// Whether the host element exists on the current page.
    fn has_host(&self, element_id: &str) -> bool;

    /// Construct and render a chart into the host element.
    fn create(&mut self, element_id: &str, config: &Value) -> Result<Self::Handle>;

    /// Replace the chart's labels and datasets, then re-render.
    fn update(&mut self, handle: &Self::Handle, view: &ChartViewModel) -> Result<()>;

    /// Switch the chart type, then re-render.
    fn set_kind(&mut self, handle: &Self::Handle, kind: ChartKind) -> Result<()>;
}

/// What happened to a widget when a response (or failure) was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Created,
    Updated,
    /// No host element on this page.
    Skipped,
    Failed,
}

/// One chart on the dashboard.
pub struct ChartWidget<H> {
    spec: &'static WidgetSpec,
    kind: ChartKind,
    view: Option<ChartViewModel>,
    handle: Option<H>,
}

impl<H> ChartWidget<H> {
    pub fn new(spec: &'static WidgetSpec) -> Self {
        Self {
            spec,
            kind: spec.kind,
            view: None,
            handle: None,
        }
    }

    /// Apply the result of a fetch. Errors are logged, never propagated.
    pub fn apply_result<S>(&mut self, surface: &mut S, result: Result<ChartResponse>) -> LoadOutcome
    where
        S: ChartSurface<Handle = H>,
    {
        match result {
            Ok(response) => self.apply(surface, response),
            Err(e) => {
                log::error!("[HR] chart {}: fetch failed: {}", self.spec.name, e);
                LoadOutcome::Failed
            }
        }
    }

    /// Build the view-model from `response` and render it.
    pub fn apply<S>(&mut self, surface: &mut S, response: ChartResponse) -> LoadOutcome
    where
        S: ChartSurface<Handle = H>,
    {
        let view = ChartViewModel::build(self.spec, response);

        if let Some(handle) = &self.handle {
            return match surface.update(handle, &view) {
                Ok(()) => {
                    self.view = Some(view);
                    LoadOutcome::Updated
                }
                Err(e) => {
                    log::error!("[HR] chart {}: update failed: {}", self.spec.name, e);
                    LoadOutcome::Failed
                }
            };
        }

        if !surface.has_host(self.spec.element_id) {
            log::info!(
                "[HR] chart {}: no #{} on this page, skipping",
                self.spec.name,
                self.spec.element_id
            );
            return LoadOutcome::Skipped;
        }

        let config = chart_config(self.spec, self.kind, &view);
        match surface.create(self.spec.element_id, &config) {
            Ok(handle) => {
                log::info!(
                    "[HR] chart {}: rendered {} labels",
                    self.spec.name,
                    view.labels.len()
                );
                self.handle = Some(handle);
                self.view = Some(view);
                LoadOutcome::Created
            }
            Err(e) => {
                log::error!("[HR] chart {}: render failed: {}", self.spec.name, e);
                LoadOutcome::Failed
            }
        }
    }

    /// Advance the chart type one step and re-render in place.
    ///
    /// Returns the new kind, or `None` if nothing is rendered yet.
    pub fn cycle_kind<S>(&mut self, surface: &mut S) -> Option<ChartKind>
    where
        S: ChartSurface<Handle = H>,
    {
        let handle = self.handle.as_ref()?;
        let next = self.kind.next();
        if let Err(e) = surface.set_kind(handle, next) {
            log::error!("[HR] chart {}: type switch failed: {}", self.spec.name, e);
            return None;
        }
        self.kind = next;
        Some(next)
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// The view-model currently on screen.
    pub fn view(&self) -> Option<&ChartViewModel> {
        self.view.as_ref()
    }

    pub fn is_rendered(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HrError;
    use crate::widgets;

    /// Records every call; handles are creation sequence numbers.
    #[derive(Default)]
    struct FakeSurface {
        hosts: Vec<&'static str>,
        created: Vec<Value>,
        updates: Vec<(usize, ChartViewModel)>,
        kinds: Vec<(usize, ChartKind)>,
        fail_create: bool,
    }

    impl FakeSurface {
        fn with_host(id: &'static str) -> Self {
            Self {
                hosts: vec![id],
                ..Self::default()
            }
        }
    }

    impl ChartSurface for FakeSurface {
        type Handle = usize;

        fn has_host(&self, element_id: &str) -> bool {
            self.hosts.iter().any(|host| *host == element_id)
        }

        fn create(&mut self, _element_id: &str, config: &Value) -> Result<usize> {
            if self.fail_create {
                return Err(HrError::Bridge("Chart is not defined".to_string()));
            }
            self.created.push(config.clone());
            Ok(self.created.len() - 1)
        }

        fn update(&mut self, handle: &usize, view: &ChartViewModel) -> Result<()> {
            self.updates.push((*handle, view.clone()));
            Ok(())
        }

        fn set_kind(&mut self, handle: &usize, kind: ChartKind) -> Result<()> {
            self.kinds.push((*handle, kind));
            Ok(())
        }
    }

    fn response(raw: &str) -> ChartResponse {
        ChartResponse::from_json(raw).unwrap()
    }

    #[test]
    fn first_response_creates_chart_with_response_order() {
        let mut surface = FakeSurface::with_host("totalEmployees");
        let mut widget = ChartWidget::new(&widgets::TOTAL_EMPLOYEES);
        let outcome = widget.apply(
            &mut surface,
            response(r#"{"labels":["A","B"],"dataSet":[{"data":[3,5]}]}"#),
        );
        assert_eq!(outcome, LoadOutcome::Created);
        assert_eq!(surface.created.len(), 1);
        let config = &surface.created[0];
        assert_eq!(config["type"], "doughnut");
        assert_eq!(config["data"]["labels"], serde_json::json!(["A", "B"]));
        assert_eq!(
            config["data"]["datasets"][0]["data"],
            serde_json::json!([3.0, 5.0])
        );
    }

    #[test]
    fn missing_host_skips_without_error() {
        let mut surface = FakeSurface::default();
        let mut widget = ChartWidget::new(&widgets::GENDER);
        let outcome = widget.apply(&mut surface, response(r#"{"labels":["Male"],"data":[1]}"#));
        assert_eq!(outcome, LoadOutcome::Skipped);
        assert!(surface.created.is_empty());
        assert!(!widget.is_rendered());
        assert!(widget.view().is_none());
    }

    #[test]
    fn refetch_updates_existing_instance_in_place() {
        let mut surface = FakeSurface::with_host("overAllLeave");
        let mut widget = ChartWidget::new(&widgets::OVERALL_LEAVE);
        widget.apply(&mut surface, response(r#"{"labels":["HR"],"data":[1]}"#));
        let outcome = widget.apply(
            &mut surface,
            response(r#"{"labels":["HR","Sales"],"data":[4,2]}"#),
        );
        assert_eq!(outcome, LoadOutcome::Updated);
        assert_eq!(surface.created.len(), 1, "no second chart instance");
        assert_eq!(surface.updates.len(), 1);
        let (handle, view) = &surface.updates[0];
        assert_eq!(*handle, 0);
        assert_eq!(view.labels, vec!["HR", "Sales"]);
        assert_eq!(view.values(), &[4.0, 2.0]);
        assert_eq!(widget.view().map(|v| v.labels.len()), Some(2));
    }

    #[test]
    fn fetch_failure_keeps_last_view() {
        let mut surface = FakeSurface::with_host("overAllLeave");
        let mut widget = ChartWidget::new(&widgets::OVERALL_LEAVE);
        widget.apply(&mut surface, response(r#"{"labels":["HR"],"data":[1]}"#));
        let outcome = widget.apply_result(
            &mut surface,
            Err(HrError::Http {
                url: "/leave/overall-leave?overall_leave=week".to_string(),
                status: 500,
            }),
        );
        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(surface.updates.is_empty());
        assert_eq!(widget.view().map(|v| v.labels.clone()), Some(vec!["HR".to_string()]));
    }

    #[test]
    fn fetch_failure_before_first_render_leaves_widget_empty() {
        let mut surface = FakeSurface::with_host("departmentChart");
        let mut widget = ChartWidget::<usize>::new(&widgets::DEPARTMENT);
        let outcome = widget.apply_result(
            &mut surface,
            ChartResponse::from_json("<!doctype html>"),
        );
        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(!widget.is_rendered());
    }

    #[test]
    fn render_failure_is_reported_and_retried_next_time() {
        let mut surface = FakeSurface::with_host("genderChart");
        surface.fail_create = true;
        let mut widget = ChartWidget::new(&widgets::GENDER);
        let body = r#"{"labels":["Male"],"dataSet":[{"data":[1]}]}"#;
        assert_eq!(widget.apply(&mut surface, response(body)), LoadOutcome::Failed);
        surface.fail_create = false;
        assert_eq!(widget.apply(&mut surface, response(body)), LoadOutcome::Created);
    }

    #[test]
    fn cycle_kind_requires_a_rendered_chart() {
        let mut surface = FakeSurface::with_host("totalEmployees");
        let mut widget = ChartWidget::new(&widgets::TOTAL_EMPLOYEES);
        assert_eq!(widget.cycle_kind(&mut surface), None);

        widget.apply(&mut surface, response(r#"{"labels":["Active"],"dataSet":[{"data":[9]}]}"#));
        assert_eq!(widget.cycle_kind(&mut surface), Some(ChartKind::Pie));
        assert_eq!(widget.cycle_kind(&mut surface), Some(ChartKind::Line));
        assert_eq!(surface.kinds, vec![(0, ChartKind::Pie), (0, ChartKind::Line)]);
        assert_eq!(widget.kind(), ChartKind::Line);
    }
}
