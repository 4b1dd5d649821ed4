//! Fixture difficulty matrix: a team × gameweek grid of difficulty
//! ratings. Every cell is populated: either a rating with the opponent,
//! or `None` for a blank gameweek. A team that plays twice in one
//! gameweek keeps the harder of its fixtures.

use crate::services::LookupError;
use crate::store::{DataStore, Gameweek, TeamId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyCell {
    pub rating: u8,
    pub opponent: String,
    pub home: bool,
}

/// Grid dimensions are exactly `teams.len()` × `gameweeks.len()`;
/// `cells[i][j]` belongs to `teams[i]` in `gameweeks[j]`.
#[derive(Debug, Clone)]
pub struct DifficultyMatrix {
    pub gameweeks: Vec<Gameweek>,
    pub teams: Vec<TeamId>,
    pub team_names: Vec<String>,
    pub cells: Vec<Vec<Option<DifficultyCell>>>,
}

/// Builds the matrix for `team_ids` (empty = every loaded team, ordered
/// by name) over the inclusive gameweek range `from..=to`.
pub fn difficulty_matrix(
    store: &DataStore,
    team_ids: &[TeamId],
    from: Gameweek,
    to: Gameweek,
) -> Result<DifficultyMatrix, LookupError> {
    let mut teams: Vec<TeamId> = if team_ids.is_empty() {
        store.teams().map(|t| t.id).collect()
    } else {
        for id in team_ids {
            if store.team(*id).is_none() {
                return Err(LookupError::Team(*id));
            }
        }
        team_ids.to_vec()
    };
    teams.sort_by_key(|id| store.team(*id).map(|t| t.name.clone()));
    teams.dedup();

    let gameweeks: Vec<Gameweek> = (from..=to).collect();
    let team_names = teams
        .iter()
        .map(|id| store.team(*id).map(|t| t.name.clone()).unwrap_or_default())
        .collect();

    let mut cells: Vec<Vec<Option<DifficultyCell>>> =
        vec![vec![None; gameweeks.len()]; teams.len()];
    for fixture in store.fixtures() {
        let Some(event) = fixture.event else {
            continue;
        };
        let Some(col) = gameweeks.iter().position(|gw| *gw == event) else {
            continue;
        };
        for (row, team) in teams.iter().enumerate() {
            let Some(rating) = fixture.difficulty_for(*team) else {
                continue;
            };
            let opponent = fixture
                .opponent_of(*team)
                .and_then(|id| store.team(id))
                .map(|t| t.short_name.clone())
                .unwrap_or_default();
            let cell = DifficultyCell {
                rating,
                opponent,
                home: fixture.is_home_for(*team),
            };
            // Double gameweek: keep the harder fixture.
            match &cells[row][col] {
                Some(existing) if existing.rating >= rating => {}
                _ => cells[row][col] = Some(cell),
            }
        }
    }

    Ok(DifficultyMatrix {
        gameweeks,
        teams,
        team_names,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use std::fs;
    use tempfile::TempDir;

    fn test_store() -> DataStore {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("teams.csv"),
            "id,code,name,short_name\n1,3,Arsenal,ARS\n2,14,Liverpool,LIV\n3,43,Man City,MCI\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("players.csv"),
            "id,web_name,team,element_type,now_cost,total_points,minutes,points_per_game,influence,creativity,threat,ict_index\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("players_gw.csv"),
            "element,round,total_points,minutes,goals_scored,assists,clean_sheets\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("fixtures.csv"),
            "id,event,kickoff_time,team_h,team_a,team_h_difficulty,team_a_difficulty\n\
             1,1,,1,2,4,3\n\
             2,2,,3,1,2,5\n\
             3,2,,2,3,4,2\n\
             4,3,,1,2,3,3\n\
             5,3,,2,1,2,4\n\
             6,,,1,3,3,3\n",
        )
        .unwrap();
        DataStore::load(dir.path()).unwrap()
    }

    #[test]
    fn test_matrix_dimensions_are_exact() {
        let store = test_store();
        let matrix = difficulty_matrix(&store, &[], 1, 3).unwrap();
        assert_eq!(matrix.teams.len(), 3);
        assert_eq!(matrix.gameweeks, vec![1, 2, 3]);
        assert_eq!(matrix.cells.len(), 3);
        assert!(matrix.cells.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_teams_ordered_by_name() {
        let store = test_store();
        let matrix = difficulty_matrix(&store, &[], 1, 3).unwrap();
        assert_eq!(matrix.team_names, vec!["Arsenal", "Liverpool", "Man City"]);
    }

    #[test]
    fn test_no_fixture_is_the_null_sentinel() {
        let store = test_store();
        let matrix = difficulty_matrix(&store, &[], 1, 3).unwrap();
        // Man City (row 2) has no fixture in gameweeks 1 and 3.
        assert_eq!(matrix.cells[2][0], None);
        assert!(matrix.cells[2][1].is_some());
        assert_eq!(matrix.cells[2][2], None);
    }

    #[test]
    fn test_ratings_and_opponents_per_side() {
        let store = test_store();
        let matrix = difficulty_matrix(&store, &[], 1, 3).unwrap();
        // Arsenal home vs Liverpool in GW1: difficulty 4.
        let cell = matrix.cells[0][0].as_ref().unwrap();
        assert_eq!(cell.rating, 4);
        assert_eq!(cell.opponent, "LIV");
        assert!(cell.home);
        // Liverpool's view of the same fixture.
        let cell = matrix.cells[1][0].as_ref().unwrap();
        assert_eq!(cell.rating, 3);
        assert_eq!(cell.opponent, "ARS");
        assert!(!cell.home);
    }

    #[test]
    fn test_double_gameweek_keeps_the_harder_fixture() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("teams.csv"),
            "id,code,name,short_name\n1,3,Arsenal,ARS\n2,14,Liverpool,LIV\n3,43,Man City,MCI\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("players.csv"),
            "id,web_name,team,element_type,now_cost,total_points,minutes,points_per_game,influence,creativity,threat,ict_index\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("players_gw.csv"),
            "element,round,total_points,minutes,goals_scored,assists,clean_sheets\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("fixtures.csv"),
            "id,event,kickoff_time,team_h,team_a,team_h_difficulty,team_a_difficulty\n\
             1,1,,1,2,2,4\n\
             2,1,,3,1,1,5\n",
        )
        .unwrap();
        let store = DataStore::load(dir.path()).unwrap();

        let matrix = difficulty_matrix(&store, &[1], 1, 1).unwrap();
        let cell = matrix.cells[0][0].as_ref().unwrap();
        assert_eq!(cell.rating, 5);
        assert_eq!(cell.opponent, "MCI");
    }

    #[test]
    fn test_unknown_team_is_a_lookup_error() {
        let store = test_store();
        let err = difficulty_matrix(&store, &[9], 1, 3).unwrap_err();
        assert_eq!(err, LookupError::Team(9));
    }

    #[test]
    fn test_unscheduled_fixtures_are_skipped() {
        let store = test_store();
        // Fixture 6 has no event; a full-span matrix still has only
        // scheduled entries.
        let matrix = difficulty_matrix(&store, &[3], 1, 3).unwrap();
        assert_eq!(matrix.cells[0][0], None);
    }
}
