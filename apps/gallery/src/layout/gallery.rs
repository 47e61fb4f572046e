//! Gallery arrangement: partition, then balance.
//!
//! Every arrangement is recomputed from scratch. `Rearranger` only remembers enough
//! about the previous arrangement to skip resize events that don't cross a breakpoint.

use serde::Serialize;
use tracing::{debug, info};

use crate::layout::balancer::{balance, BalanceReport};
use crate::layout::partition::Layout;
use crate::layout::viewport::Breakpoints;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// The slides assigned to one column, top to bottom, as input indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnAssignment {
    pub column: usize,
    pub items: Vec<usize>,
}

/// A balanced layout together with the report of the pass that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangedGallery {
    pub layout: Layout,
    pub report: BalanceReport,
}

impl ArrangedGallery {
    pub fn assignments(&self) -> Vec<ColumnAssignment> {
        self.layout
            .columns()
            .iter()
            .enumerate()
            .map(|(column, items)| ColumnAssignment {
                column,
                items: items.clone(),
            })
            .collect()
    }
}

/// Discrete events that may require the gallery to be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    InitialRender { viewport_width: u32 },
    /// A debounced resize has settled.
    ViewportResized { viewport_width: u32 },
    /// Images and videos finished loading, so rendered heights changed.
    ContentLoaded,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Partitions `heights` into `number_of_columns` columns and balances them.
pub fn arrange(heights: &[f64], number_of_columns: usize) -> ArrangedGallery {
    let mut layout = Layout::partition(heights, number_of_columns);
    let report = balance(&mut layout);

    debug!(
        slides = heights.len(),
        columns = layout.column_count(),
        transfers = report.transfers,
        reverted = report.reverted,
        initial_difference = report.initial_difference,
        final_difference = report.final_difference,
        "Gallery arranged"
    );

    ArrangedGallery { layout, report }
}

/// Pure column assignment for measured slide heights.
///
/// Empty input yields no columns. `number_of_columns == 0` returns the input
/// unchanged: one column holding every slide in order.
pub fn balance_columns(heights: &[f64], number_of_columns: usize) -> Vec<ColumnAssignment> {
    if heights.is_empty() {
        return Vec::new();
    }
    if number_of_columns == 0 {
        return vec![ColumnAssignment {
            column: 0,
            items: (0..heights.len()).collect(),
        }];
    }
    arrange(heights, number_of_columns).assignments()
}

// ────────────────────────────────────────────────────────────────────────────
// Rearranger
// ────────────────────────────────────────────────────────────────────────────

/// Decides when a trigger needs a fresh arrangement.
///
/// Callers are expected to coalesce bursts of resize events before calling `handle`.
#[derive(Debug, Clone)]
pub struct Rearranger {
    breakpoints: Breakpoints,
    last_column_count: Option<usize>,
    last_heights: Vec<f64>,
}

impl Rearranger {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            last_column_count: None,
            last_heights: Vec::new(),
        }
    }

    pub fn last_column_count(&self) -> Option<usize> {
        self.last_column_count
    }

    /// Returns a new arrangement, or `None` when the current one is still valid
    /// (or when content loaded before anything was rendered).
    pub fn handle(&mut self, trigger: Trigger, heights: &[f64]) -> Option<ArrangedGallery> {
        let column_count = match trigger {
            Trigger::InitialRender { viewport_width } => {
                self.breakpoints.columns_for_width(viewport_width).column_count
            }
            Trigger::ViewportResized { viewport_width } => {
                let column_count = self.breakpoints.columns_for_width(viewport_width).column_count;
                let unchanged = self.last_column_count == Some(column_count)
                    && self.last_heights.as_slice() == heights;
                if unchanged {
                    debug!(column_count, "Resize did not cross a breakpoint; keeping layout");
                    return None;
                }
                column_count
            }
            Trigger::ContentLoaded => self.last_column_count?,
        };

        info!(?trigger, column_count, slides = heights.len(), "Rearranging gallery");
        let arranged = arrange(heights, column_count);
        self.last_column_count = Some(column_count);
        self.last_heights = heights.to_vec();
        Some(arranged)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
