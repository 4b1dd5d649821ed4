//! Cost-vs-performance table: the player pool reduced by optional
//! position, team and budget filters. An empty filter means no
//! restriction; an empty result is a valid outcome, not an error.

use rust_decimal::Decimal;

use crate::services::LookupError;
use crate::store::{DataStore, PlayerId, Position, TeamId};

#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    /// Positions to keep; empty keeps all.
    pub positions: Vec<Position>,
    /// Team ids to keep; empty keeps all.
    pub teams: Vec<TeamId>,
    /// Inclusive cost bounds in millions.
    pub min_cost: Option<Decimal>,
    pub max_cost: Option<Decimal>,
}

impl PlayerFilter {
    fn matches(&self, position: Position, team: TeamId, cost: Decimal) -> bool {
        if !self.positions.is_empty() && !self.positions.contains(&position) {
            return false;
        }
        if !self.teams.is_empty() && !self.teams.contains(&team) {
            return false;
        }
        if self.min_cost.is_some_and(|min| cost < min) {
            return false;
        }
        if self.max_cost.is_some_and(|max| cost > max) {
            return false;
        }
        true
    }
}

/// One row of the shaped table, ready for scatter plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct CostPerformanceRow {
    pub player_id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub team_name: String,
    pub position: Position,
    pub cost: Decimal,
    pub total_points: i32,
    pub points_per_game: Decimal,
}

/// Applies `filter` to the full player table. Team ids named in the
/// filter must exist in the snapshot; an unknown id is a lookup error
/// rather than a silently empty result.
pub fn cost_vs_performance(
    store: &DataStore,
    filter: &PlayerFilter,
) -> Result<Vec<CostPerformanceRow>, LookupError> {
    for team in &filter.teams {
        if store.team(*team).is_none() {
            return Err(LookupError::Team(*team));
        }
    }

    let mut rows = Vec::new();
    for player in store.players() {
        if !filter.matches(player.position, player.team, player.cost) {
            continue;
        }
        // Load-time validation guarantees the team reference resolves.
        let team_name = store
            .team(player.team)
            .map(|t| t.name.clone())
            .unwrap_or_default();
        rows.push(CostPerformanceRow {
            player_id: player.id,
            name: player.web_name.clone(),
            team_id: player.team,
            team_name,
            position: player.position,
            cost: player.cost,
            total_points: player.total_points,
            points_per_game: player.points_per_game,
        });
    }
    Ok(rows)
}
