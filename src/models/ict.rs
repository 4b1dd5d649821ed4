use serde::{Deserialize, Serialize};

use crate::store::PlayerId;

/// Query parameters for GET /api/charts/ict
#[derive(Debug, Clone, Deserialize)]
pub struct IctQuery {
    pub player1: PlayerId,
    pub player2: PlayerId,
}

/// Radar chart specification: each trace has one value per entry of
/// `axes`. Values are raw FPL ICT components; `max` sizes the radial
/// axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarChartSpec {
    pub title: String,
    pub axes: Vec<String>,
    pub traces: Vec<RadarTrace>,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarTrace {
    pub name: String,
    pub values: Vec<f64>,
}
