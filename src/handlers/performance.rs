use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::charts::line::performance_line;
use crate::models::error::{ApiError, bad_request, not_found};
use crate::models::performance::{LineChartSpec, PerformanceQuery};
use crate::services::performance::{Metric, compare_players};

/// GET /api/charts/performance?player1=&player2=&metric=
pub async fn get_performance_chart(
    State(state): State<AppState>,
    Query(query): Query<PerformanceQuery>,
) -> Result<Json<LineChartSpec>, ApiError> {
    let metric = match query.metric.as_deref() {
        None => Metric::Points,
        Some(raw) => Metric::parse(raw)
            .ok_or_else(|| bad_request(format!("unknown metric '{}'", raw)))?,
    };

    tracing::debug!(
        "Performance chart: players {} vs {}, metric {:?}",
        query.player1,
        query.player2,
        metric
    );

    let comparison = compare_players(&state.store, query.player1, query.player2, metric)
        .map_err(|e| not_found(e.to_string()))?;

    Ok(Json(performance_line(&comparison)))
}
