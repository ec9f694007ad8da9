//! Full-page navigation for click-to-filter.

use crate::storage::LocalStore;
use hr_core::filter::{follow_click, ChartClick, FilterTarget, Navigator};
use hr_core::period::Period;

/// Navigates by assigning `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("[HR] navigation to {url} failed: {:?}", e);
        }
    }
}

/// Clear the saved list filters and go to the list view for `click`.
pub fn open_filtered_list(target: FilterTarget, click: &ChartClick, period: &Period) {
    follow_click(target, click, period, &mut LocalStore, &mut BrowserNavigator);
}
