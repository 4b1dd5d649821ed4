//! Data shaping layer: pure, deterministic functions over the loaded
//! [`DataStore`](crate::store::DataStore) that produce the analysis-ready
//! views behind each chart.

pub mod cost_performance;
pub mod fixture_difficulty;
pub mod ict;
pub mod performance;

use thiserror::Error;

use crate::store::{PlayerId, TeamId};

/// A requested id is not present in the loaded snapshot. Handlers map
/// this to 404 so only the affected chart shows the failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("player {0} not found in loaded data")]
    Player(PlayerId),
    #[error("team {0} not found in loaded data")]
    Team(TeamId),
}
