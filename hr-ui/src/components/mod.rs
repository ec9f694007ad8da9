//! Reusable Dioxus RSX components for the HR apps.

mod chart_card;
mod column_menu;
mod loading_spinner;
mod period_selector;

pub use chart_card::ChartCard;
pub use column_menu::{ColumnMenuItem, ColumnToggleMenu};
pub use loading_spinner::LoadingSpinner;
pub use period_selector::PeriodSelector;
