use serde::Deserialize;

use crate::store::{Gameweek, PlayerId};

/// One row of `players_gw.csv`: a single player's return for a single
/// gameweek. A player who did not feature in a gameweek simply has no
/// row for it.
#[derive(Debug, Clone, Deserialize)]
pub struct GameweekStat {
    pub element: PlayerId,
    pub round: Gameweek,
    pub total_points: i32,
    pub minutes: u32,
    pub goals_scored: u32,
    pub assists: u32,
    pub clean_sheets: u32,
}

pub(super) const REQUIRED_COLUMNS: &[&str] = &[
    "element",
    "round",
    "total_points",
    "minutes",
    "goals_scored",
    "assists",
    "clean_sheets",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gameweek_stat_from_csv_row() {
        let data = "element,round,total_points,minutes,goals_scored,assists,clean_sheets,bonus\n\
                    301,5,12,90,1,1,0,3\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let stat: GameweekStat = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(stat.element, 301);
        assert_eq!(stat.round, 5);
        assert_eq!(stat.total_points, 12);
    }

    #[test]
    fn test_non_numeric_points_is_an_error() {
        let data = "element,round,total_points,minutes,goals_scored,assists,clean_sheets\n\
                    301,5,n/a,90,1,1,0\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: Result<GameweekStat, _> = reader.deserialize().next().unwrap();
        assert!(row.is_err());
    }
}
