use crate::models::cost::{ScatterChartSpec, ScatterPoint};
use crate::services::cost_performance::CostPerformanceRow;

pub fn cost_performance_scatter(rows: &[CostPerformanceRow]) -> ScatterChartSpec {
    let points: Vec<ScatterPoint> = rows
        .iter()
        .map(|row| ScatterPoint {
            player_id: row.player_id,
            name: row.name.clone(),
            team: row.team_name.clone(),
            group: row.position.label().to_string(),
            cost: row.cost,
            total_points: row.total_points,
        })
        .collect();

    ScatterChartSpec {
        title: "Player Cost vs. Performance".to_string(),
        x_title: "Cost (£m)".to_string(),
        y_title: "Total Points".to_string(),
        total_count: points.len(),
        no_data: points.is_empty(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Position;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rows_map_to_points_grouped_by_position() {
        let rows = vec![CostPerformanceRow {
            player_id: 10,
            name: "Saka".to_string(),
            team_id: 1,
            team_name: "Arsenal".to_string(),
            position: Position::Midfielder,
            cost: dec!(10.2),
            total_points: 180,
            points_per_game: dec!(5.2),
        }];
        let spec = cost_performance_scatter(&rows);
        assert_eq!(spec.total_count, 1);
        assert!(!spec.no_data);
        assert_eq!(spec.points[0].group, "MID");
        assert_eq!(spec.points[0].cost, dec!(10.2));
    }

    #[test]
    fn test_empty_result_is_flagged_no_data() {
        let spec = cost_performance_scatter(&[]);
        assert!(spec.no_data);
        assert_eq!(spec.total_count, 0);
        assert!(spec.points.is_empty());
    }
}
