//! ICT vectors for the radar chart. Values are the raw season totals
//! from the FPL export, not normalized: both players are plotted on the
//! same radial axis, sized from the dataset maximum, so raw values stay
//! directly comparable.

use rust_decimal::Decimal;

use crate::services::LookupError;
use crate::store::{DataStore, PlayerId};

pub const ICT_AXES: [&str; 4] = ["influence", "creativity", "threat", "ict_index"];

#[derive(Debug, Clone, PartialEq)]
pub struct IctVector {
    pub player_id: PlayerId,
    pub name: String,
    pub influence: Decimal,
    pub creativity: Decimal,
    pub threat: Decimal,
    pub ict_index: Decimal,
}

impl IctVector {
    pub fn components(&self) -> [Decimal; 4] {
        [self.influence, self.creativity, self.threat, self.ict_index]
    }
}

pub fn ict_vector(store: &DataStore, id: PlayerId) -> Result<IctVector, LookupError> {
    let player = store.player(id).ok_or(LookupError::Player(id))?;
    Ok(IctVector {
        player_id: id,
        name: player.web_name.clone(),
        influence: player.influence,
        creativity: player.creativity,
        threat: player.threat,
        ict_index: player.ict_index,
    })
}

pub fn ict_pair(
    store: &DataStore,
    first: PlayerId,
    second: PlayerId,
) -> Result<(IctVector, IctVector), LookupError> {
    Ok((ict_vector(store, first)?, ict_vector(store, second)?))
}

/// Upper bound for the radial axis: the largest ICT component anywhere
/// in the dataset, padded by 20% so the biggest trace does not touch the
/// chart edge.
pub fn radial_range(store: &DataStore) -> Decimal {
    let max = store
        .players()
        .flat_map(|p| [p.influence, p.creativity, p.threat, p.ict_index])
        .max()
        .unwrap_or_default();
    max * Decimal::new(12, 1)
}
