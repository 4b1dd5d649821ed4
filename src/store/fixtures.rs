use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::store::{Gameweek, TeamId};

/// One row of `fixtures.csv`. `event` is blank for fixtures that have
/// not been scheduled into a gameweek yet; those rows are kept but never
/// appear in the difficulty matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub event: Option<Gameweek>,
    pub kickoff_time: Option<DateTime<Utc>>,
    pub team_h: TeamId,
    pub team_a: TeamId,
    pub team_h_difficulty: u8,
    pub team_a_difficulty: u8,
}

impl Fixture {
    /// Difficulty of this fixture from `team`'s perspective, if the team
    /// is involved at all.
    pub fn difficulty_for(&self, team: TeamId) -> Option<u8> {
        if team == self.team_h {
            Some(self.team_h_difficulty)
        } else if team == self.team_a {
            Some(self.team_a_difficulty)
        } else {
            None
        }
    }

    /// The opposing team from `team`'s perspective.
    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        if team == self.team_h {
            Some(self.team_a)
        } else if team == self.team_a {
            Some(self.team_h)
        } else {
            None
        }
    }

    pub fn is_home_for(&self, team: TeamId) -> bool {
        team == self.team_h
    }
}

pub(super) const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "event",
    "kickoff_time",
    "team_h",
    "team_a",
    "team_h_difficulty",
    "team_a_difficulty",
];
