//! Click-to-filter navigation.
//!
//! Clicking a segment or bar takes the user to the matching list view with
//! the clicked category as a query filter. The list view's remembered filter
//! form is cleared first so it does not override the new filter.

use crate::period::Period;
use crate::storage::{KeyValueStore, SAVED_FILTERS_KEY};
use urlencoding::encode;

/// A click on a rendered data point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartClick {
    /// Category label of the clicked point.
    pub label: String,
    /// Label of the dataset the point belongs to, if it has one.
    pub dataset_label: Option<String>,
}

impl ChartClick {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            dataset_label: None,
        }
    }
}

/// Which list view a chart filters into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    /// `/employee/employee-view?is_active=True|False`
    EmployeeStatus,
    /// `/employee/employee-view?gender=<label>`
    EmployeeGender,
    /// `/employee/employee-view?department=<label>`
    EmployeeDepartment,
    /// `/leave/request-view?department_name=<label>&overall_leave=<period>`
    LeaveByDepartment,
}

pub const EMPLOYEE_VIEW: &str = "/employee/employee-view";
pub const LEAVE_REQUEST_VIEW: &str = "/leave/request-view";

impl FilterTarget {
    /// URL of the filtered list view for `click`.
    pub fn url(&self, click: &ChartClick, period: &Period) -> String {
        match self {
            FilterTarget::EmployeeStatus => {
                let active = if click.label.eq_ignore_ascii_case("active") {
                    "True"
                } else {
                    "False"
                };
                format!("{EMPLOYEE_VIEW}?is_active={active}")
            }
            FilterTarget::EmployeeGender => format!(
                "{EMPLOYEE_VIEW}?gender={}",
                encode(&click.label.to_lowercase())
            ),
            FilterTarget::EmployeeDepartment => {
                format!("{EMPLOYEE_VIEW}?department={}", encode(&click.label))
            }
            FilterTarget::LeaveByDepartment => format!(
                "{LEAVE_REQUEST_VIEW}?department_name={}&overall_leave={}",
                encode(&click.label),
                encode(period.as_str())
            ),
        }
    }
}

/// Something that can send the browser to another page.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Clear saved list filters, then navigate to the filtered list view.
///
/// Returns the URL navigated to.
pub fn follow_click<S, N>(
    target: FilterTarget,
    click: &ChartClick,
    period: &Period,
    store: &mut S,
    navigator: &mut N,
) -> String
where
    S: KeyValueStore + ?Sized,
    N: Navigator + ?Sized,
{
    let url = target.url(click, period);
    log::info!(
        "[HR] filter: {:?} click on {:?} (dataset {:?}) -> {}",
        target,
        click.label,
        click.dataset_label,
        url
    );
    store.remove(SAVED_FILTERS_KEY);
    navigator.navigate(&url);
    url
}
