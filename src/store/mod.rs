//! Data access layer: loads the CSV snapshot into typed, id-indexed
//! tables and validates referential integrity up front. The loaded
//! [`DataStore`] is immutable for the lifetime of the process; a data
//! refresh means restarting with a new snapshot.

pub mod fixtures;
pub mod gameweeks;
pub mod players;
pub mod teams;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::DataError;

pub use fixtures::Fixture;
pub use gameweeks::GameweekStat;
pub use players::{Player, Position};
pub use teams::Team;

pub type PlayerId = u32;
pub type TeamId = u32;
pub type Gameweek = u8;

const PLAYERS_CSV: &str = "players.csv";
const PLAYERS_GW_CSV: &str = "players_gw.csv";
const TEAMS_CSV: &str = "teams.csv";
const FIXTURES_CSV: &str = "fixtures.csv";

/// The read-only data context shared by all request handlers.
#[derive(Debug)]
pub struct DataStore {
    teams: BTreeMap<TeamId, Team>,
    players: BTreeMap<PlayerId, Player>,
    // Per-player rows, sorted by round, one row per round.
    gameweek_stats: HashMap<PlayerId, Vec<GameweekStat>>,
    fixtures: Vec<Fixture>,
    last_gameweek: Gameweek,
}

impl DataStore {
    /// Loads all four CSV files from `dir` and validates the snapshot.
    /// Fails on the first missing file, missing column, malformed row or
    /// broken reference; never yields a partially loaded store.
    pub fn load(dir: &Path) -> Result<Self, DataError> {
        let team_rows: Vec<Team> = read_rows(&dir.join(TEAMS_CSV), teams::REQUIRED_COLUMNS)?;
        let mut teams = BTreeMap::new();
        for team in team_rows {
            teams.insert(team.id, team);
        }

        let player_rows: Vec<players::PlayerRecord> =
            read_rows(&dir.join(PLAYERS_CSV), players::REQUIRED_COLUMNS)?;
        let mut players = BTreeMap::new();
        for record in player_rows {
            let player = Player::from_record(record)?;
            if !teams.contains_key(&player.team) {
                return Err(DataError::UnknownTeam {
                    player: player.id,
                    team: player.team,
                });
            }
            players.insert(player.id, player);
        }

        let gw_rows: Vec<GameweekStat> =
            read_rows(&dir.join(PLAYERS_GW_CSV), gameweeks::REQUIRED_COLUMNS)?;
        let mut gameweek_stats: HashMap<PlayerId, Vec<GameweekStat>> = HashMap::new();
        let mut last_gameweek: Gameweek = 0;
        for stat in gw_rows {
            if !players.contains_key(&stat.element) {
                return Err(DataError::UnknownPlayer {
                    player: stat.element,
                });
            }
            if stat.round == 0 {
                return Err(DataError::InvalidGameweek {
                    player: stat.element,
                    round: stat.round,
                });
            }
            last_gameweek = last_gameweek.max(stat.round);
            merge_stat(gameweek_stats.entry(stat.element).or_default(), stat);
        }
        for stats in gameweek_stats.values_mut() {
            stats.sort_by_key(|s| s.round);
        }

        let fixtures: Vec<Fixture> =
            read_rows(&dir.join(FIXTURES_CSV), fixtures::REQUIRED_COLUMNS)?;
        for fixture in &fixtures {
            for team in [fixture.team_h, fixture.team_a] {
                if !teams.contains_key(&team) {
                    return Err(DataError::UnknownFixtureTeam {
                        fixture: fixture.id,
                        team,
                    });
                }
            }
            for value in [fixture.team_h_difficulty, fixture.team_a_difficulty] {
                if !(1..=5).contains(&value) {
                    return Err(DataError::DifficultyOutOfRange {
                        fixture: fixture.id,
                        value,
                    });
                }
            }
            if fixture.event == Some(0) {
                return Err(DataError::InvalidFixtureEvent {
                    fixture: fixture.id,
                });
            }
        }

        Ok(DataStore {
            teams,
            players,
            gameweek_stats,
            fixtures,
            last_gameweek,
        })
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// All teams, ordered by id.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    /// All players, ordered by id.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Per-gameweek rows for one player, sorted by round. Empty for a
    /// player with no recorded gameweeks.
    pub fn gameweek_stats(&self, id: PlayerId) -> &[GameweekStat] {
        self.gameweek_stats
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Latest round present in the gameweek table (0 when the table is
    /// empty). The shared axis of every performance series runs 1..=this.
    pub fn last_gameweek(&self) -> Gameweek {
        self.last_gameweek
    }

    /// Range of gameweeks with at least one scheduled fixture.
    pub fn fixture_gameweek_span(&self) -> Option<(Gameweek, Gameweek)> {
        let mut span: Option<(Gameweek, Gameweek)> = None;
        for event in self.fixtures.iter().filter_map(|f| f.event) {
            span = Some(match span {
                Some((lo, hi)) => (lo.min(event), hi.max(event)),
                None => (event, event),
            });
        }
        span
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }
}

/// The snapshot occasionally carries duplicate (player, round) rows for
/// double gameweeks exported match-by-match; fold them into one row so
/// series axes stay unique and increasing.
fn merge_stat(stats: &mut Vec<GameweekStat>, stat: GameweekStat) {
    if let Some(existing) = stats.iter_mut().find(|s| s.round == stat.round) {
        existing.total_points += stat.total_points;
        existing.minutes += stat.minutes;
        existing.goals_scored += stat.goals_scored;
        existing.assists += stat.assists;
        existing.clean_sheets += stat.clean_sheets;
    } else {
        stats.push(stat);
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>, DataError> {
    if !path.exists() {
        return Err(DataError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;

    // Check the header up front so a missing column fails even for an
    // empty table, with a clearer message than a per-row serde error.
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result.map_err(|e| csv_error(path, e))?);
    }
    Ok(rows)
}

fn csv_error(path: &Path, source: csv::Error) -> DataError {
    DataError::Csv {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEAMS: &str = "\
id,code,name,short_name
1,3,Arsenal,ARS
2,14,Liverpool,LIV
";

    const PLAYERS: &str = "\
id,web_name,team,element_type,now_cost,total_points,minutes,points_per_game,influence,creativity,threat,ict_index
10,Saka,1,3,102,180,2900,5.2,900.0,1100.5,800.2,280.1
11,M.Salah,2,3,131,211,3042,6.1,1250.4,980.2,1400.0,363.1
12,Raya,1,1,56,120,3150,3.4,600.1,20.4,0.0,62.0
";

    const PLAYERS_GW: &str = "\
element,round,total_points,minutes,goals_scored,assists,clean_sheets
10,1,6,90,1,0,0
10,2,2,85,0,0,0
11,1,9,90,1,1,0
11,3,12,90,2,0,0
";

    const FIXTURES: &str = "\
id,event,kickoff_time,team_h,team_a,team_h_difficulty,team_a_difficulty
1,1,2025-08-16T14:00:00Z,1,2,4,3
2,2,2025-08-23T14:00:00Z,2,1,2,5
3,,,1,2,3,3
";

    fn write_snapshot(dir: &TempDir, teams: &str, players: &str, gw: &str, fixtures: &str) {
        fs::write(dir.path().join("teams.csv"), teams).unwrap();
        fs::write(dir.path().join("players.csv"), players).unwrap();
        fs::write(dir.path().join("players_gw.csv"), gw).unwrap();
        fs::write(dir.path().join("fixtures.csv"), fixtures).unwrap();
    }

    fn load_default() -> DataStore {
        let dir = TempDir::new().unwrap();
        write_snapshot(&dir, TEAMS, PLAYERS, PLAYERS_GW, FIXTURES);
        DataStore::load(dir.path()).unwrap()
    }

    #[test]
    fn test_load_full_snapshot() {
        let store = load_default();
        assert_eq!(store.team_count(), 2);
        assert_eq!(store.player_count(), 3);
        assert_eq!(store.fixture_count(), 3);
        assert_eq!(store.last_gameweek(), 3);
        assert_eq!(store.player(11).unwrap().web_name, "M.Salah");
        assert_eq!(store.team(1).unwrap().short_name, "ARS");
        assert_eq!(store.gameweek_stats(10).len(), 2);
        assert!(store.gameweek_stats(12).is_empty());
    }

    #[test]
    fn test_missing_file_fails_load() {
        let dir = TempDir::new().unwrap();
        write_snapshot(&dir, TEAMS, PLAYERS, PLAYERS_GW, FIXTURES);
        fs::remove_file(dir.path().join("fixtures.csv")).unwrap();
        let err = DataStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::MissingFile { .. }));
    }

    #[test]
    fn test_teams_file_missing_id_column_fails_load() {
        let dir = TempDir::new().unwrap();
        let teams = "code,name,short_name\n3,Arsenal,ARS\n";
        write_snapshot(&dir, teams, PLAYERS, PLAYERS_GW, FIXTURES);
        let err = DataStore::load(dir.path()).unwrap_err();
        match err {
            DataError::MissingColumn { column, .. } => assert_eq!(column, "id"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_numeric_field_fails_load() {
        let dir = TempDir::new().unwrap();
        let players = "\
id,web_name,team,element_type,now_cost,total_points,minutes,points_per_game,influence,creativity,threat,ict_index
10,Saka,1,3,not-a-number,180,2900,5.2,900.0,1100.5,800.2,280.1
";
        write_snapshot(&dir, TEAMS, players, PLAYERS_GW, FIXTURES);
        let err = DataStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }

    #[test]
    fn test_player_with_unknown_team_fails_load() {
        let dir = TempDir::new().unwrap();
        let players = "\
id,web_name,team,element_type,now_cost,total_points,minutes,points_per_game,influence,creativity,threat,ict_index
10,Saka,99,3,102,180,2900,5.2,900.0,1100.5,800.2,280.1
";
        write_snapshot(&dir, TEAMS, players, PLAYERS_GW, FIXTURES);
        let err = DataStore::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            DataError::UnknownTeam {
                player: 10,
                team: 99
            }
        ));
    }

    #[test]
    fn test_gameweek_row_for_unknown_player_fails_load() {
        let dir = TempDir::new().unwrap();
        let gw = "\
element,round,total_points,minutes,goals_scored,assists,clean_sheets
999,1,6,90,1,0,0
";
        write_snapshot(&dir, TEAMS, PLAYERS, gw, FIXTURES);
        let err = DataStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::UnknownPlayer { player: 999 }));
    }

    #[test]
    fn test_difficulty_out_of_range_fails_load() {
        let dir = TempDir::new().unwrap();
        let fixtures = "\
id,event,kickoff_time,team_h,team_a,team_h_difficulty,team_a_difficulty
1,1,,1,2,6,3
";
        write_snapshot(&dir, TEAMS, PLAYERS, PLAYERS_GW, fixtures);
        let err = DataStore::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            DataError::DifficultyOutOfRange { value: 6, .. }
        ));
    }

    #[test]
    fn test_duplicate_rounds_fold_into_one_row() {
        let dir = TempDir::new().unwrap();
        let gw = "\
element,round,total_points,minutes,goals_scored,assists,clean_sheets
10,1,6,90,1,0,0
10,1,3,45,0,1,0
";
        write_snapshot(&dir, TEAMS, PLAYERS, gw, FIXTURES);
        let store = DataStore::load(dir.path()).unwrap();
        let stats = store.gameweek_stats(10);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].total_points, 9);
        assert_eq!(stats[0].minutes, 135);
    }

    #[test]
    fn test_fixture_gameweek_span_skips_unscheduled() {
        let store = load_default();
        assert_eq!(store.fixture_gameweek_span(), Some((1, 2)));
    }
}
