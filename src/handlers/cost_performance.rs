use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::charts::scatter::cost_performance_scatter;
use crate::handlers::parse_csv_param;
use crate::models::cost::{CostPerformanceQuery, ScatterChartSpec};
use crate::models::error::{ApiError, bad_request, not_found};
use crate::services::cost_performance::{PlayerFilter, cost_vs_performance};
use crate::store::Position;

/// GET /api/charts/cost-performance?positions=&teams=&min_cost=&max_cost=
///
/// All filters are optional; an empty result is a 200 with `no_data`
/// set, not an error.
pub async fn get_cost_performance_chart(
    State(state): State<AppState>,
    Query(query): Query<CostPerformanceQuery>,
) -> Result<Json<ScatterChartSpec>, ApiError> {
    let filter = build_filter(&query)?;

    let rows = cost_vs_performance(&state.store, &filter)
        .map_err(|e| not_found(e.to_string()))?;

    tracing::debug!("Cost/performance chart: {} rows after filtering", rows.len());
    Ok(Json(cost_performance_scatter(&rows)))
}

fn build_filter(query: &CostPerformanceQuery) -> Result<PlayerFilter, ApiError> {
    let positions = match &query.positions {
        Some(raw) => parse_csv_param(raw, "position", Position::parse)?,
        None => Vec::new(),
    };
    let teams = match &query.teams {
        Some(raw) => parse_csv_param(raw, "team id", |s| s.parse().ok())?,
        None => Vec::new(),
    };

    if let (Some(min), Some(max)) = (query.min_cost, query.max_cost) {
        if min > max {
            return Err(bad_request(format!(
                "min_cost {} is greater than max_cost {}",
                min, max
            )));
        }
    }

    Ok(PlayerFilter {
        positions,
        teams,
        min_cost: query.min_cost,
        max_cost: query.max_cost,
    })
}
