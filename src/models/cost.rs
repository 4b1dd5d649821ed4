use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::PlayerId;

/// Query parameters for GET /api/charts/cost-performance
#[derive(Debug, Clone, Deserialize)]
pub struct CostPerformanceQuery {
    /// Comma-separated position labels: "FWD,MID"
    pub positions: Option<String>,
    /// Comma-separated team ids: "1,14"
    pub teams: Option<String>,
    /// Inclusive budget bounds in millions.
    pub min_cost: Option<Decimal>,
    pub max_cost: Option<Decimal>,
}

/// Scatter chart specification. `no_data` marks a valid-but-empty filter
/// result so the page can show its "no data" state instead of a blank
/// plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub points: Vec<ScatterPoint>,
    pub total_count: usize,
    pub no_data: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub player_id: PlayerId,
    pub name: String,
    pub team: String,
    /// Legend/color group, the position label ("GK", "DEF", ...).
    pub group: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
    pub total_points: i32,
}
