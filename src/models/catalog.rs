use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::{PlayerId, Position, TeamId};

/// One entry of GET /api/players, enough to populate the player
/// dropdowns and show cost/points in the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub team: String,
    pub position: Position,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
    pub total_points: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub players: Vec<PlayerSummary>,
    pub total_count: usize,
}

/// One entry of GET /api/teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<TeamSummary>,
    pub total_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
