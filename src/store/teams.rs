use serde::{Deserialize, Serialize};

use crate::store::TeamId;

/// One row of `teams.csv`. Extra columns in the snapshot (strength
/// ratings, league position and so on) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub code: u32,
    pub name: String,
    pub short_name: String,
}

pub(super) const REQUIRED_COLUMNS: &[&str] = &["id", "code", "name", "short_name"];
