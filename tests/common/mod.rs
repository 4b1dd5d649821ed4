use std::fs;
use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use fpl_analytics_backend::store::DataStore;
use fpl_analytics_backend::{AppState, routes};

const TEAMS: &str = "\
id,code,name,short_name
1,3,Arsenal,ARS
2,14,Liverpool,LIV
3,43,Man City,MCI
";

const PLAYERS: &str = "\
id,web_name,team,element_type,now_cost,total_points,minutes,points_per_game,influence,creativity,threat,ict_index
10,Saka,1,3,102,180,2900,5.2,900.0,1100.5,800.2,280.1
11,M.Salah,2,3,131,211,3042,6.1,1250.4,980.2,1400.0,363.1
12,Haaland,3,4,151,196,2800,5.9,980.0,400.2,1500.7,288.0
13,Jesus,1,4,45,52,900,2.1,300.0,280.5,420.2,100.0
14,Raya,1,1,56,120,3150,3.4,600.1,20.4,0.0,62.0
";

const PLAYERS_GW: &str = "\
element,round,total_points,minutes,goals_scored,assists,clean_sheets
10,1,6,90,1,0,0
10,2,2,85,0,0,0
11,1,9,90,1,1,0
11,3,12,90,2,0,0
12,1,2,90,0,0,0
12,2,13,90,2,1,0
12,3,5,63,1,0,0
";

const FIXTURES: &str = "\
id,event,kickoff_time,team_h,team_a,team_h_difficulty,team_a_difficulty
1,1,2025-08-16T14:00:00Z,1,2,4,3
2,2,2025-08-23T14:00:00Z,2,3,5,3
3,2,2025-08-23T16:30:00Z,3,1,2,4
4,3,2025-08-30T14:00:00Z,1,2,3,3
";

/// Writes the standard test snapshot into a fresh directory and builds
/// the full application router over it.
pub fn build_test_router() -> Router {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(dir.path().join("teams.csv"), TEAMS).unwrap();
    fs::write(dir.path().join("players.csv"), PLAYERS).unwrap();
    fs::write(dir.path().join("players_gw.csv"), PLAYERS_GW).unwrap();
    fs::write(dir.path().join("fixtures.csv"), FIXTURES).unwrap();

    let store = DataStore::load(dir.path()).expect("test snapshot should load");
    routes::router(AppState {
        store: Arc::new(store),
    })
}
