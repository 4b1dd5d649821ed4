use serde::{Deserialize, Serialize};

use crate::store::{Gameweek, PlayerId};

/// Query parameters for GET /api/charts/performance
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceQuery {
    pub player1: PlayerId,
    pub player2: PlayerId,
    /// points | minutes | goals | assists | clean_sheets (default: points)
    pub metric: Option<String>,
}

/// Line chart specification: every series has one value per entry of
/// `gameweeks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub gameweeks: Vec<Gameweek>,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub values: Vec<f64>,
}
