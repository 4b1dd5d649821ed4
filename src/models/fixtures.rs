use serde::{Deserialize, Serialize};

use crate::store::Gameweek;

/// Query parameters for GET /api/charts/fixture-difficulty
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureDifficultyQuery {
    /// Comma-separated team ids; omitted = all teams.
    pub teams: Option<String>,
    /// Inclusive gameweek range; defaults to the scheduled span.
    pub from: Option<Gameweek>,
    pub to: Option<Gameweek>,
}

/// Heatmap specification. `ratings[i][j]` is the difficulty for
/// `teams[i]` in `gameweeks[j]`, or null when that team has no fixture;
/// `opponents` carries the hover text with the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub gameweeks: Vec<Gameweek>,
    pub teams: Vec<String>,
    pub ratings: Vec<Vec<Option<u8>>>,
    pub opponents: Vec<Vec<Option<String>>>,
    /// Plotly-style colorscale stops.
    pub colorscale: Vec<(f64, String)>,
    pub no_data: bool,
}
