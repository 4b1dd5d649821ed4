use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::store::{PlayerId, TeamId};

/// Playing position, mapped from the FPL `element_type` code (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub fn from_element_type(code: u8) -> Option<Self> {
        match code {
            1 => Some(Position::Goalkeeper),
            2 => Some(Position::Defender),
            3 => Some(Position::Midfielder),
            4 => Some(Position::Forward),
            _ => None,
        }
    }

    /// Short label used in chart legends and query parameters.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }

    /// Parses a query-parameter value. Accepts the short label in any
    /// case ("fwd", "FWD") or the full position name ("forward").
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "GK" | "GKP" | "GOALKEEPER" => Some(Position::Goalkeeper),
            "DEF" | "DEFENDER" => Some(Position::Defender),
            "MID" | "MIDFIELDER" => Some(Position::Midfielder),
            "FWD" | "FORWARD" => Some(Position::Forward),
            _ => None,
        }
    }
}

/// One row of `players.csv` as it appears on disk. `now_cost` is in
/// tenths of a million, matching the FPL API export.
#[derive(Debug, Deserialize)]
pub(super) struct PlayerRecord {
    pub id: PlayerId,
    pub web_name: String,
    pub team: TeamId,
    pub element_type: u8,
    pub now_cost: i64,
    pub total_points: i32,
    pub minutes: u32,
    pub points_per_game: Decimal,
    pub influence: Decimal,
    pub creativity: Decimal,
    pub threat: Decimal,
    pub ict_index: Decimal,
}

pub(super) const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "web_name",
    "team",
    "element_type",
    "now_cost",
    "total_points",
    "minutes",
    "points_per_game",
    "influence",
    "creativity",
    "threat",
    "ict_index",
];

/// A validated player. Cost is converted to millions so the API and the
/// budget filter speak the same unit as the game UI (e.g. 12.5).
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub web_name: String,
    pub team: TeamId,
    pub position: Position,
    pub cost: Decimal,
    pub total_points: i32,
    pub minutes: u32,
    pub points_per_game: Decimal,
    pub influence: Decimal,
    pub creativity: Decimal,
    pub threat: Decimal,
    pub ict_index: Decimal,
}

impl Player {
    pub(super) fn from_record(record: PlayerRecord) -> Result<Self, DataError> {
        let position = Position::from_element_type(record.element_type).ok_or(
            DataError::UnknownPosition {
                player: record.id,
                code: record.element_type,
            },
        )?;
        if record.now_cost < 0 {
            return Err(DataError::NegativeCost { player: record.id });
        }

        Ok(Player {
            id: record.id,
            web_name: record.web_name,
            team: record.team,
            position,
            // tenths of a million -> millions
            cost: Decimal::new(record.now_cost, 1),
            total_points: record.total_points,
            minutes: record.minutes,
            points_per_game: record.points_per_game,
            influence: record.influence,
            creativity: record.creativity,
            threat: record.threat,
            ict_index: record.ict_index,
        })
    }
}
