use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::charts::heatmap::difficulty_heatmap;
use crate::handlers::parse_csv_param;
use crate::models::error::{ApiError, bad_request, not_found};
use crate::models::fixtures::{FixtureDifficultyQuery, HeatmapSpec};
use crate::services::fixture_difficulty::difficulty_matrix;
use crate::store::Gameweek;

/// GET /api/charts/fixture-difficulty?teams=&from=&to=
///
/// Defaults to every team over the span of scheduled fixtures.
pub async fn get_fixture_difficulty_chart(
    State(state): State<AppState>,
    Query(query): Query<FixtureDifficultyQuery>,
) -> Result<Json<HeatmapSpec>, ApiError> {
    let teams = match &query.teams {
        Some(raw) => parse_csv_param(raw, "team id", |s| s.parse().ok())?,
        None => Vec::new(),
    };

    let (span_from, span_to) = state.store.fixture_gameweek_span().unwrap_or((1, 1));
    let from = query.from.unwrap_or(span_from);
    let to = query.to.unwrap_or(span_to);
    validate_range(from, to)?;

    tracing::debug!(
        "Fixture difficulty chart: {} team filter entries, gameweeks {}..={}",
        teams.len(),
        from,
        to
    );

    let matrix = difficulty_matrix(&state.store, &teams, from, to)
        .map_err(|e| not_found(e.to_string()))?;
    Ok(Json(difficulty_heatmap(&matrix)))
}

fn validate_range(from: Gameweek, to: Gameweek) -> Result<(), ApiError> {
    if from == 0 {
        return Err(bad_request("gameweeks are numbered from 1"));
    }
    if from > to {
        return Err(bad_request(format!(
            "gameweek range start {} is after end {}",
            from, to
        )));
    }
    Ok(())
}
