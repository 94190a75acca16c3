//! Player and StandingRow data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by storage on registration.
pub type PlayerId = i64;

/// A registered player.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Full name as registered. Not required to be unique, may be empty.
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A player's record at a point in time: wins and total matches played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches where the player was winner or loser.
    pub matches_played: u32,
}

impl StandingRow {
    /// Row for a player who has not played yet.
    pub fn unplayed(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            wins: 0,
            matches_played: 0,
        }
    }

    /// The (id, name) part of the row.
    pub fn player(&self) -> Player {
        Player::new(self.id, self.name.clone())
    }
}
