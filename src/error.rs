use std::path::PathBuf;

use thiserror::Error;

use crate::store::{PlayerId, TeamId};

/// Errors raised while loading the CSV snapshot. Any of these aborts
/// startup: the server never runs against a partially loaded store.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("missing data file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("players.csv: player {player} references unknown team {team}")]
    UnknownTeam { player: PlayerId, team: TeamId },

    #[error("players.csv: player {player} has unknown position code {code}")]
    UnknownPosition { player: PlayerId, code: u8 },

    #[error("players.csv: player {player} has negative cost")]
    NegativeCost { player: PlayerId },

    #[error("players_gw.csv: row references unknown player {player}")]
    UnknownPlayer { player: PlayerId },

    #[error("players_gw.csv: player {player} has invalid gameweek {round}")]
    InvalidGameweek { player: PlayerId, round: u8 },

    #[error("fixtures.csv: fixture {fixture} references unknown team {team}")]
    UnknownFixtureTeam { fixture: u32, team: TeamId },

    #[error("fixtures.csv: fixture {fixture} is scheduled in gameweek 0")]
    InvalidFixtureEvent { fixture: u32 },

    #[error("fixtures.csv: fixture {fixture} has difficulty {value} outside 1..=5")]
    DifficultyOutOfRange { fixture: u32, value: u8 },
}
