use crate::models::performance::{LineChartSpec, LineSeries};
use crate::services::performance::PerformanceComparison;

pub fn performance_line(comparison: &PerformanceComparison) -> LineChartSpec {
    LineChartSpec {
        title: "Player Performance by Gameweek".to_string(),
        x_title: "Gameweek".to_string(),
        y_title: comparison.metric.axis_title().to_string(),
        gameweeks: comparison.gameweeks.clone(),
        series: vec![
            LineSeries {
                name: comparison.first.name.clone(),
                values: comparison.first.values.clone(),
            },
            LineSeries {
                name: comparison.second.name.clone(),
                values: comparison.second.values.clone(),
            },
            LineSeries {
                name: "Average".to_string(),
                values: comparison.average.clone(),
            },
        ],
    }
}
