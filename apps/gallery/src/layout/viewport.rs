//! Viewport width → gallery column count.
//!
//! Phones in portrait see two columns, tablets three, laptops and up four. Each count
//! maps to the Bootstrap grid class that divides the row evenly.

use serde::Serialize;

/// Width breakpoints (CSS pixels) that change the gallery column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Below this width the gallery uses two columns.
    pub phone_max_px: u32,
    /// At or above this width the gallery uses four columns.
    pub desktop_min_px: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            phone_max_px: 544,
            desktop_min_px: 1200,
        }
    }
}

/// Column count chosen for a viewport, plus the grid class used to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewportColumns {
    pub column_count: usize,
    pub column_class: &'static str,
}

impl Breakpoints {
    pub fn columns_for_width(&self, viewport_width: u32) -> ViewportColumns {
        let column_count = if viewport_width < self.phone_max_px {
            2
        } else if viewport_width < self.desktop_min_px {
            3
        } else {
            4
        };

        ViewportColumns {
            column_count,
            column_class: column_class(column_count),
        }
    }
}

/// Bootstrap class for a column count; `None` for counts that do not divide a
/// 12-column row evenly.
pub fn bootstrap_class(column_count: usize) -> Option<&'static str> {
    match column_count {
        1 => Some("col-xs-12"),
        2 => Some("col-xs-6"),
        3 => Some("col-xs-4"),
        4 => Some("col-xs-3"),
        6 => Some("col-xs-2"),
        12 => Some("col-xs-1"),
        _ => None,
    }
}

fn column_class(column_count: usize) -> &'static str {
    bootstrap_class(column_count).unwrap_or("col-xs-3")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_width_uses_two_columns() {
        let bp = Breakpoints::default();
        let cols = bp.columns_for_width(375);
        assert_eq!(cols.column_count, 2);
        assert_eq!(cols.column_class, "col-xs-6");
        assert_eq!(bp.columns_for_width(543).column_count, 2);
    }

    #[test]
    fn test_tablet_width_uses_three_columns() {
        let bp = Breakpoints::default();
        assert_eq!(bp.columns_for_width(544).column_count, 3);
        assert_eq!(bp.columns_for_width(1199).column_class, "col-xs-4");
    }

    #[test]
    fn test_desktop_width_uses_four_columns() {
        let bp = Breakpoints::default();
        let cols = bp.columns_for_width(1200);
        assert_eq!(cols.column_count, 4);
        assert_eq!(cols.column_class, "col-xs-3");
        assert_eq!(bp.columns_for_width(2560).column_count, 4);
    }

    #[test]
    fn test_custom_breakpoints() {
        let bp = Breakpoints {
            phone_max_px: 600,
            desktop_min_px: 1400,
        };
        assert_eq!(bp.columns_for_width(599).column_count, 2);
        assert_eq!(bp.columns_for_width(1300).column_count, 3);
    }

    #[test]
    fn test_bootstrap_class_for_uneven_count() {
        assert_eq!(bootstrap_class(5), None);
        assert_eq!(bootstrap_class(1), Some("col-xs-12"));
    }
}
