//! Match results and next-round pairings.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Outcome of one played match. Immutable once recorded.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl GameMatch {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self { winner, loser }
    }
}

/// Two players drawn to meet in the next round, in standings order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: Player,
    pub second: Player,
}

impl Pairing {
    pub fn new(first: Player, second: Player) -> Self {
        Self { first, second }
    }

    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.first.id, self.second.id)
    }

    /// Flat `(id1, name1, id2, name2)` form.
    pub fn to_tuple(&self) -> (PlayerId, &str, PlayerId, &str) {
        (
            self.first.id,
            self.first.name.as_str(),
            self.second.id,
            self.second.name.as_str(),
        )
    }
}
