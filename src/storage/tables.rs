//! In-memory rendition of the `players` and `matches` relations.

use super::StorageError;
use crate::models::{GameMatch, Player, PlayerId, StandingRow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Both relations plus the id serial. Enforces the same constraints a
/// relational schema would: serial ids and foreign keys from matches to players.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    /// Next id the serial will hand out. Never reused, even after a reset.
    pub next_id: PlayerId,
    pub players: Vec<Player>,
    pub matches: Vec<GameMatch>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            next_id: 1,
            players: Vec::new(),
            matches: Vec::new(),
        }
    }
}

impl Tables {
    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    pub fn insert_player(&mut self, name: &str) -> PlayerId {
        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player::new(id, name));
        id
    }

    pub fn delete_players(&mut self) -> Result<usize, StorageError> {
        if !self.matches.is_empty() {
            return Err(StorageError::PlayersReferenced {
                matches: self.matches.len(),
            });
        }
        Ok(std::mem::take(&mut self.players).len())
    }

    pub fn delete_matches(&mut self) -> usize {
        std::mem::take(&mut self.matches).len()
    }

    pub fn insert_match(&mut self, game: GameMatch) -> Result<(), StorageError> {
        for id in [game.winner, game.loser] {
            if !self.has_player(id) {
                return Err(StorageError::UnknownPlayer(id));
            }
        }
        self.matches.push(game);
        Ok(())
    }

    /// Aggregate wins and matches played per player, best record first.
    pub fn standings(&self) -> Vec<StandingRow> {
        let mut rows: Vec<StandingRow> = self.players.iter().map(StandingRow::unplayed).collect();
        let index: HashMap<PlayerId, usize> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.id, i))
            .collect();

        for m in &self.matches {
            if let Some(&i) = index.get(&m.winner) {
                rows[i].wins += 1;
                rows[i].matches_played += 1;
            }
            // A self-match counts once, like `winner = id OR loser = id`.
            if m.loser != m.winner {
                if let Some(&i) = index.get(&m.loser) {
                    rows[i].matches_played += 1;
                }
            }
        }

        rows.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then_with(|| b.matches_played.cmp(&a.matches_played))
        });
        rows
    }
}
