//! Greedy column-height balancer.
//!
//! Moves one slide at a time from the longest column to the shortest one until the
//! greatest pairwise height difference stops shrinking. The slide moved is always the
//! shortest one in the source column, which bounds how far a single transfer can
//! overshoot. A final transfer that fails to improve the layout is undone.
//!
//! This is a local search, not an optimal partition: the result is the fixed point of
//! the heuristic, and running it again on its own output changes nothing.

use serde::Serialize;
use tracing::debug;

use crate::layout::partition::Layout;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// The column pair with the greatest height difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatestDifference {
    pub difference: f64,
    pub shortest: usize,
    pub longest: usize,
}

/// A single slide transfer, kept so it can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub item: usize,
    pub from: usize,
    pub to: usize,
    /// Position the slide occupied in `from` before it was moved.
    pub from_index: usize,
}

/// Outcome of one balancing pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    /// Transfers that remain applied (an undone transfer is not counted).
    pub transfers: usize,
    /// True if the last attempted transfer did not help and was undone.
    pub reverted: bool,
    pub initial_difference: f64,
    pub final_difference: f64,
}

impl BalanceReport {
    pub(crate) fn unchanged(difference: f64) -> Self {
        Self {
            transfers: 0,
            reverted: false,
            initial_difference: difference,
            final_difference: difference,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Finds the greatest difference between any two values.
///
/// Every ordered pair is compared; a pair replaces the current best only when its
/// difference is strictly greater, so ties keep the first pair found.
pub fn greatest_difference(heights: &[f64]) -> GreatestDifference {
    let mut best = GreatestDifference {
        difference: 0.0,
        shortest: 0,
        longest: 1,
    };

    for i in 0..heights.len() {
        for j in 0..heights.len() {
            if i == j {
                continue;
            }
            let difference = (heights[i] - heights[j]).abs();
            if difference > best.difference {
                let (shortest, longest) = if heights[i] > heights[j] {
                    (j, i)
                } else {
                    (i, j)
                };
                best = GreatestDifference {
                    difference,
                    shortest,
                    longest,
                };
            }
        }
    }

    best
}

/// Moves the shortest slide of column `from` into column `to`.
///
/// The slide keeps its row when the destination has a slide at the same index
/// (it is inserted before it); otherwise it goes to the bottom of the destination.
/// Returns `None` if `from` is empty.
pub fn transfer_shortest(layout: &mut Layout, from: usize, to: usize) -> Option<Transfer> {
    let from_index = shortest_item_index(layout, from)?;

    let columns = layout.columns_mut();
    let item = columns[from].remove(from_index);
    let destination = &mut columns[to];
    if from_index < destination.len() {
        destination.insert(from_index, item);
    } else {
        destination.push(item);
    }

    Some(Transfer {
        item,
        from,
        to,
        from_index,
    })
}

/// Undoes `transfer`, putting the slide back at its original index in the source
/// column (clamped to the column's current length).
pub fn undo_transfer(layout: &mut Layout, transfer: &Transfer) {
    let columns = layout.columns_mut();
    let Some(position) = columns[transfer.to]
        .iter()
        .position(|&item| item == transfer.item)
    else {
        return;
    };
    let item = columns[transfer.to].remove(position);

    let source = &mut columns[transfer.from];
    let at = transfer.from_index.min(source.len());
    source.insert(at, item);
}

/// Runs the greedy balancing loop on `layout` in place.
///
/// No-op when there are fewer than two columns, when no column holds more than one
/// slide, or when all columns already have equal height.
pub fn balance(layout: &mut Layout) -> BalanceReport {
    if layout.column_count() < 2 {
        return BalanceReport::unchanged(0.0);
    }

    let mut previous = greatest_difference(&layout.column_heights());
    let mut report = BalanceReport::unchanged(previous.difference);

    let has_multi_slide_column = layout.columns().iter().any(|c| c.len() > 1);
    if !has_multi_slide_column || previous.difference <= 0.0 {
        return report;
    }

    loop {
        let Some(moved) = transfer_shortest(layout, previous.longest, previous.shortest) else {
            break;
        };
        report.transfers += 1;

        let current = greatest_difference(&layout.column_heights());
        let improvement = previous.difference - current.difference;
        debug!(
            item = moved.item,
            from = moved.from,
            to = moved.to,
            difference = current.difference,
            improvement,
            "Gallery balancer: transferred slide"
        );

        if improvement > 0.0 {
            previous = current;
            if current.difference > 0.0 {
                continue;
            }
            break;
        }

        // The transfer overshot or made no progress. Put it back.
        undo_transfer(layout, &moved);
        report.transfers -= 1;
        report.reverted = true;
        break;
    }

    report.final_difference = previous.difference;
    report
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Index of the shortest slide in `column`; first occurrence wins on ties.
fn shortest_item_index(layout: &Layout, column: usize) -> Option<usize> {
    let items = &layout.columns()[column];
    let mut shortest: Option<(usize, f64)> = None;
    for (index, &item) in items.iter().enumerate() {
        let height = layout.item_height(item);
        match shortest {
            Some((_, best)) if height >= best => {}
            _ => shortest = Some((index, height)),
        }
    }
    shortest.map(|(index, _)| index)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
