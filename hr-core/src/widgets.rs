//! Registry of dashboard chart widgets.
//!
//! Each [`WidgetSpec`] fixes where a chart lives on the page, where its data
//! comes from, how it is styled, and where a click on it navigates.

use crate::chart::ChartKind;
use crate::filter::FilterTarget;
use crate::palette::{self, Palette};
use crate::period::Period;
use urlencoding::encode;

/// Bar chart geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub stacked: bool,
    /// Whole-number y-axis ticks only.
    pub integer_ticks: bool,
    /// Radius of the two top corners; the bottom stays square.
    pub corner_radius: u8,
    pub hide_legend: bool,
}

/// Legend placement for doughnuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendStyle {
    pub position: &'static str,
    pub point_style: &'static str,
}

/// Static configuration of one chart widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSpec {
    /// Short name, used by the CLI.
    pub name: &'static str,
    /// Id of the host `<canvas>`.
    pub element_id: &'static str,
    /// Data endpoint path.
    pub endpoint: &'static str,
    pub kind: ChartKind,
    pub palette: Palette,
    pub bar: Option<BarStyle>,
    pub legend: Option<LegendStyle>,
    /// Label given to datasets the server leaves unlabelled.
    pub dataset_label: Option<&'static str>,
    /// Query parameter carrying the selected period, if the widget has one.
    pub period_param: Option<&'static str>,
    pub filter: FilterTarget,
}

impl WidgetSpec {
    /// Path (with query string) to fetch for the given period.
    pub fn request_path(&self, period: &Period) -> String {
        match self.period_param {
            Some(param) => format!("{}?{}={}", self.endpoint, param, encode(period.as_str())),
            None => self.endpoint.to_string(),
        }
    }
}

pub const TOTAL_EMPLOYEES: WidgetSpec = WidgetSpec {
    name: "employees",
    element_id: "totalEmployees",
    endpoint: "/employee/dashboard-employee",
    kind: ChartKind::Doughnut,
    palette: palette::BRAND,
    bar: None,
    legend: None,
    dataset_label: None,
    period_param: None,
    filter: FilterTarget::EmployeeStatus,
};

pub const GENDER: WidgetSpec = WidgetSpec {
    name: "gender",
    element_id: "genderChart",
    endpoint: "/employee/dashboard-employee-gender",
    kind: ChartKind::Doughnut,
    palette: palette::GENDER,
    bar: None,
    legend: Some(LegendStyle {
        position: "bottom",
        point_style: "circle",
    }),
    dataset_label: None,
    period_param: None,
    filter: FilterTarget::EmployeeGender,
};

pub const DEPARTMENT: WidgetSpec = WidgetSpec {
    name: "department",
    element_id: "departmentChart",
    endpoint: "/employee/dashboard-employee-department",
    kind: ChartKind::Bar,
    palette: palette::BRAND,
    bar: Some(BarStyle {
        stacked: true,
        integer_ticks: true,
        corner_radius: 8,
        hide_legend: true,
    }),
    legend: None,
    dataset_label: None,
    period_param: None,
    filter: FilterTarget::EmployeeDepartment,
};

pub const OVERALL_LEAVE: WidgetSpec = WidgetSpec {
    name: "overall-leave",
    element_id: "overAllLeave",
    endpoint: "/leave/overall-leave",
    kind: ChartKind::Doughnut,
    palette: palette::DEPARTMENTS,
    bar: None,
    legend: None,
    dataset_label: Some("Leave count"),
    period_param: Some("overall_leave"),
    filter: FilterTarget::LeaveByDepartment,
};

/// Every registered widget.
pub const ALL: [&WidgetSpec; 4] = [&TOTAL_EMPLOYEES, &GENDER, &DEPARTMENT, &OVERALL_LEAVE];

/// Look a widget up by name.
pub fn find(name: &str) -> Option<&'static WidgetSpec> {
    ALL.iter().copied().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_endpoints_ignore_period() {
        assert_eq!(
            TOTAL_EMPLOYEES.request_path(&Period::new("month")),
            "/employee/dashboard-employee"
        );
    }

    #[test]
    fn leave_endpoint_carries_period() {
        assert_eq!(
            OVERALL_LEAVE.request_path(&Period::default()),
            "/leave/overall-leave?overall_leave=today"
        );
        assert_eq!(
            OVERALL_LEAVE.request_path(&Period::new("week")),
            "/leave/overall-leave?overall_leave=week"
        );
    }

    #[test]
    fn find_by_name() {
        assert_eq!(find("gender").map(|s| s.element_id), Some("genderChart"));
        assert!(find("payroll").is_none());
    }

    #[test]
    fn element_ids_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.element_id, b.element_id);
            }
        }
    }
}
