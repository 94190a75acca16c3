//! Storage held entirely in process memory.

use super::{Storage, StorageError, Tables};
use crate::models::{GameMatch, Player, PlayerId, StandingRow};

/// In-memory store. State lives as long as the value does.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Tables,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }
}

impl Storage for MemoryStore {
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, StorageError> {
        Ok(self.tables.insert_player(name))
    }

    fn delete_players(&mut self) -> Result<usize, StorageError> {
        self.tables.delete_players()
    }

    fn delete_matches(&mut self) -> Result<usize, StorageError> {
        Ok(self.tables.delete_matches())
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.tables.players.len())
    }

    fn players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.tables.players.clone())
    }

    fn insert_match(&mut self, game: GameMatch) -> Result<(), StorageError> {
        self.tables.insert_match(game)
    }

    fn standings(&self) -> Result<Vec<StandingRow>, StorageError> {
        Ok(self.tables.standings())
    }
}
