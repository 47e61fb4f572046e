//! Axum route handlers for the Gallery API.

use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::layout::balancer::BalanceReport;
use crate::layout::gallery::arrange;
use crate::layout::viewport::{bootstrap_class, ViewportColumns};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// One measured slide. `height` is the rendered outer height in CSS pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideInput {
    pub id: String,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct ArrangeRequest {
    pub items: Vec<SlideInput>,
    pub viewport_width: Option<u32>,
    pub column_count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ColumnOutput {
    pub column: usize,
    pub height: f64,
    pub items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ArrangeResponse {
    pub column_count: usize,
    pub column_class: Option<&'static str>,
    pub columns: Vec<ColumnOutput>,
    pub report: BalanceReport,
}

#[derive(Debug, Deserialize)]
pub struct ColumnsQuery {
    pub viewport_width: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/gallery/columns?viewport_width=W
///
/// Returns the column count and grid class the gallery uses at that width.
pub async fn handle_columns(
    State(state): State<AppState>,
    Query(query): Query<ColumnsQuery>,
) -> Json<ViewportColumns> {
    Json(state.breakpoints.columns_for_width(query.viewport_width))
}

/// POST /api/v1/gallery/arrange
///
/// Partitions the measured slides into columns and evens out the column heights.
/// The column count comes from either `viewport_width` or an explicit `column_count`.
pub async fn handle_arrange(
    State(state): State<AppState>,
    Json(request): Json<ArrangeRequest>,
) -> Result<Json<ArrangeResponse>, AppError> {
    validate_items(&request.items, state.config.max_items)?;

    let (column_count, column_class) = match (request.viewport_width, request.column_count) {
        (Some(width), None) => {
            let viewport = state.breakpoints.columns_for_width(width);
            (viewport.column_count, Some(viewport.column_class))
        }
        (None, Some(0)) => {
            return Err(AppError::Validation(
                "column_count must be at least 1".to_string(),
            ))
        }
        (None, Some(count)) if count > state.config.max_columns => {
            return Err(AppError::Validation(format!(
                "column_count must be at most {} (got {count})",
                state.config.max_columns
            )))
        }
        (None, Some(count)) => (count, bootstrap_class(count)),
        _ => {
            return Err(AppError::Validation(
                "provide exactly one of viewport_width or column_count".to_string(),
            ))
        }
    };

    if request.items.is_empty() {
        return Ok(Json(ArrangeResponse {
            column_count,
            column_class,
            columns: vec![],
            report: BalanceReport::unchanged(0.0),
        }));
    }

    // The balancing pass is CPU-bound; keep it off the async executor.
    let heights: Vec<f64> = request.items.iter().map(|s| s.height).collect();
    let arranged = tokio::task::spawn_blocking(move || arrange(&heights, column_count))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed while arranging gallery: {e}"))
        })?;

    info!(
        slides = request.items.len(),
        column_count,
        transfers = arranged.report.transfers,
        final_difference = arranged.report.final_difference,
        "Gallery arrange request served"
    );

    let columns = arranged
        .assignments()
        .into_iter()
        .map(|assignment| ColumnOutput {
            column: assignment.column,
            height: arranged.layout.column_height(assignment.column),
            items: assignment
                .items
                .iter()
                .map(|&i| request.items[i].id.clone())
                .collect(),
        })
        .collect();

    Ok(Json(ArrangeResponse {
        column_count,
        column_class,
        columns,
        report: arranged.report,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn validate_items(items: &[SlideInput], max_items: usize) -> Result<(), AppError> {
    if items.len() > max_items {
        return Err(AppError::Validation(format!(
            "at most {max_items} items can be arranged at once (got {})",
            items.len()
        )));
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !item.height.is_finite() || item.height < 0.0 {
            return Err(AppError::Validation(format!(
                "item '{}' has an invalid height: {}",
                item.id, item.height
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(AppError::Validation(format!(
                "duplicate item id '{}'",
                item.id
            )));
        }
    }

    Ok(())
}
