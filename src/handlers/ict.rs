use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::charts::radar::ict_radar;
use crate::models::error::{ApiError, not_found};
use crate::models::ict::{IctQuery, RadarChartSpec};
use crate::services::ict::{ict_pair, radial_range};

/// GET /api/charts/ict?player1=&player2=
pub async fn get_ict_chart(
    State(state): State<AppState>,
    Query(query): Query<IctQuery>,
) -> Result<Json<RadarChartSpec>, ApiError> {
    let (first, second) = ict_pair(&state.store, query.player1, query.player2)
        .map_err(|e| not_found(e.to_string()))?;

    tracing::debug!("ICT chart: {} vs {}", first.name, second.name);
    let range = radial_range(&state.store);
    Ok(Json(ict_radar(&first, &second, range)))
}
