//! Pairwise gameweek comparison: two players' per-gameweek returns on a
//! shared axis, plus the league average for context.
//!
//! Missing-value policy: gameweeks with no row for a player are
//! zero-filled. A blank week is a zero contribution in FPL scoring, so
//! zero keeps the series honest while guaranteeing both series share the
//! identical axis.

use serde::{Deserialize, Serialize};

use crate::services::LookupError;
use crate::store::{DataStore, Gameweek, GameweekStat, PlayerId};

/// Per-gameweek metric selectable for the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Points,
    Minutes,
    Goals,
    Assists,
    CleanSheets,
}

impl Metric {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "points" => Some(Metric::Points),
            "minutes" => Some(Metric::Minutes),
            "goals" => Some(Metric::Goals),
            "assists" => Some(Metric::Assists),
            "clean_sheets" => Some(Metric::CleanSheets),
            _ => None,
        }
    }

    pub fn axis_title(&self) -> &'static str {
        match self {
            Metric::Points => "Total Points",
            Metric::Minutes => "Minutes",
            Metric::Goals => "Goals Scored",
            Metric::Assists => "Assists",
            Metric::CleanSheets => "Clean Sheets",
        }
    }

    fn value_of(&self, stat: &GameweekStat) -> f64 {
        match self {
            Metric::Points => stat.total_points as f64,
            Metric::Minutes => stat.minutes as f64,
            Metric::Goals => stat.goals_scored as f64,
            Metric::Assists => stat.assists as f64,
            Metric::CleanSheets => stat.clean_sheets as f64,
        }
    }
}

/// One player's series on the shared gameweek axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeries {
    pub player_id: PlayerId,
    pub name: String,
    pub values: Vec<f64>,
}

/// The shaped view behind the weekly performance chart. All three value
/// vectors have the same length as `gameweeks`.
#[derive(Debug, Clone)]
pub struct PerformanceComparison {
    pub metric: Metric,
    pub gameweeks: Vec<Gameweek>,
    pub first: PlayerSeries,
    pub second: PlayerSeries,
    pub average: Vec<f64>,
}

pub fn compare_players(
    store: &DataStore,
    first: PlayerId,
    second: PlayerId,
    metric: Metric,
) -> Result<PerformanceComparison, LookupError> {
    let gameweeks: Vec<Gameweek> = (1..=store.last_gameweek()).collect();

    Ok(PerformanceComparison {
        metric,
        first: player_series(store, first, metric, &gameweeks)?,
        second: player_series(store, second, metric, &gameweeks)?,
        average: average_series(store, metric, &gameweeks),
        gameweeks,
    })
}

fn player_series(
    store: &DataStore,
    id: PlayerId,
    metric: Metric,
    gameweeks: &[Gameweek],
) -> Result<PlayerSeries, LookupError> {
    let player = store.player(id).ok_or(LookupError::Player(id))?;
    let stats = store.gameweek_stats(id);

    let values = gameweeks
        .iter()
        .map(|gw| {
            stats
                .iter()
                .find(|s| s.round == *gw)
                .map(|s| metric.value_of(s))
                .unwrap_or(0.0)
        })
        .collect();

    Ok(PlayerSeries {
        player_id: id,
        name: player.web_name.clone(),
        values,
    })
}

/// League-wide mean of `metric` per gameweek, over players with a row in
/// that gameweek. Gameweeks nobody played yet average to zero.
fn average_series(store: &DataStore, metric: Metric, gameweeks: &[Gameweek]) -> Vec<f64> {
    let mut sums = vec![0.0; gameweeks.len()];
    let mut counts = vec![0u32; gameweeks.len()];

    for player in store.players() {
        for stat in store.gameweek_stats(player.id) {
            if let Some(idx) = gameweeks.iter().position(|gw| *gw == stat.round) {
                sums[idx] += metric.value_of(stat);
                counts[idx] += 1;
            }
        }
    }

    sums.iter()
        .zip(&counts)
        .map(|(sum, count)| if *count > 0 { sum / *count as f64 } else { 0.0 })
        .collect()
}
