//! Initial partition of gallery slides into columns.
//!
//! Slides are split into contiguous blocks of the input order. When the slide count
//! does not divide evenly, the first `remainder` columns each receive one extra slide,
//! and every later column's block shifts right by the extras already handed out.
//! Column item counts therefore differ by at most one.

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Assignment of every slide to exactly one column.
///
/// `columns[c]` lists slide indices (into `heights`) from top to bottom.
/// Built fresh for every arrangement and mutated in place by the balancer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    heights: Vec<f64>,
    columns: Vec<Vec<usize>>,
}

impl Layout {
    /// Partitions `heights.len()` slides into `number_of_columns` columns.
    ///
    /// `number_of_columns == 0` is treated as a single column holding everything.
    pub fn partition(heights: &[f64], number_of_columns: usize) -> Self {
        let number_of_columns = number_of_columns.max(1);
        let total = heights.len();
        let per_column = total / number_of_columns;
        let remainder = total % number_of_columns;

        let mut columns = Vec::with_capacity(number_of_columns);
        let mut start = 0;
        for column in 0..number_of_columns {
            let extra = usize::from(column < remainder);
            let end = start + per_column + extra;
            columns.push((start..end).collect());
            start = end;
        }

        Self {
            heights: heights.to_vec(),
            columns,
        }
    }

    pub fn columns(&self) -> &[Vec<usize>] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Vec<usize>] {
        &mut self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Rendered height of one slide.
    pub fn item_height(&self, item: usize) -> f64 {
        self.heights[item]
    }

    /// Stacked height of a column (no gaps between slides).
    pub fn column_height(&self, column: usize) -> f64 {
        self.columns[column]
            .iter()
            .map(|&item| self.heights[item])
            .sum()
    }

    pub fn column_heights(&self) -> Vec<f64> {
        (0..self.columns.len())
            .map(|c| self.column_height(c))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
