use crate::models::fixtures::HeatmapSpec;
use crate::services::fixture_difficulty::DifficultyMatrix;

// Green (easy) to red (hard), matching the rating scale direction.
const COLOR_EASY: &str = "#00DFA2";
const COLOR_HARD: &str = "#FF0060";

pub fn difficulty_heatmap(matrix: &DifficultyMatrix) -> HeatmapSpec {
    let ratings: Vec<Vec<Option<u8>>> = matrix
        .cells
        .iter()
        .map(|row| row.iter().map(|c| c.as_ref().map(|c| c.rating)).collect())
        .collect();
    let opponents: Vec<Vec<Option<String>>> = matrix
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| c.as_ref().map(opponent_label))
                .collect()
        })
        .collect();
    let no_data = ratings.iter().all(|row| row.iter().all(Option::is_none));

    HeatmapSpec {
        title: "Fixtures Difficulty Rating by Gameweek".to_string(),
        x_title: "Gameweek".to_string(),
        y_title: "Team".to_string(),
        gameweeks: matrix.gameweeks.clone(),
        teams: matrix.team_names.clone(),
        ratings,
        opponents,
        colorscale: vec![
            (0.0, COLOR_EASY.to_string()),
            (1.0, COLOR_HARD.to_string()),
        ],
        no_data,
    }
}

fn opponent_label(cell: &crate::services::fixture_difficulty::DifficultyCell) -> String {
    if cell.home {
        format!("{} (H)", cell.opponent)
    } else {
        format!("{} (A)", cell.opponent)
    }
}
