use axum::{Json, extract::State};

use crate::AppState;
use crate::models::catalog::{
    HealthResponse, PlayerSummary, PlayersResponse, TeamSummary, TeamsResponse,
};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /api/players — the dropdown catalog, ordered by name.
pub async fn list_players(State(state): State<AppState>) -> Json<PlayersResponse> {
    let mut players: Vec<PlayerSummary> = state
        .store
        .players()
        .map(|p| PlayerSummary {
            id: p.id,
            name: p.web_name.clone(),
            team_id: p.team,
            team: state
                .store
                .team(p.team)
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            position: p.position,
            cost: p.cost,
            total_points: p.total_points,
        })
        .collect();
    players.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!("Listing {} players", players.len());
    Json(PlayersResponse {
        total_count: players.len(),
        players,
    })
}

/// GET /api/teams — the team catalog, ordered by name.
pub async fn list_teams(State(state): State<AppState>) -> Json<TeamsResponse> {
    let mut teams: Vec<TeamSummary> = state
        .store
        .teams()
        .map(|t| TeamSummary {
            id: t.id,
            name: t.name.clone(),
            short_name: t.short_name.clone(),
        })
        .collect();
    teams.sort_by(|a, b| a.name.cmp(&b.name));

    Json(TeamsResponse {
        total_count: teams.len(),
        teams,
    })
}
