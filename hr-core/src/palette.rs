//! Colour palettes for dashboard charts.
//!
//! Chart.js applies a `backgroundColor` array positionally: a one-colour
//! palette paints every segment the same, longer palettes colour segments in
//! order and wrap.

/// An ordered list of CSS colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(pub &'static [&'static str]);

/// Brand purple used for single-colour charts.
pub const BRAND: Palette = Palette(&["#8C52FF"]);

/// Shades of the brand purple for the gender breakdown.
pub const GENDER: Palette = Palette(&["#8c52ff", "#bea1f7", "#5e17eb"]);

/// Mixed palette for per-department leave counts.
pub const DEPARTMENTS: Palette = Palette(&[
    "#5F489D",
    "#E49394",
    "#AF9962",
    "rgb(75, 192, 192)",
    "rgb(153, 102, 255)",
    "rgb(255, 159, 64)",
]);

impl Palette {
    pub fn colors(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_colour_palette() {
        assert_eq!(BRAND.colors(), vec!["#8C52FF"]);
    }

    #[test]
    fn palettes_keep_their_order() {
        assert_eq!(GENDER.colors(), vec!["#8c52ff", "#bea1f7", "#5e17eb"]);
        assert_eq!(DEPARTMENTS.colors().len(), 6);
        assert!(Palette(&[]).colors().is_empty());
    }
}
