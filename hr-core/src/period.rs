//! Aggregation period for the overall-leave chart.

use std::fmt;

/// Value sent as `overall_leave=<period>`. Unknown values are passed
/// through to the server unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period(String);

impl Period {
    /// (value, label) pairs offered by the period selector.
    pub const PRESETS: [(&'static str, &'static str); 4] = [
        ("today", "Today"),
        ("week", "This Week"),
        ("month", "This Month"),
        ("year", "This Year"),
    ];

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::new("today")
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
