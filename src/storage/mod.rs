//! Storage capability consumed by the registry and pairing engine.
//!
//! The core never opens storage itself: every operation receives a
//! [`Storage`] implementation and performs one unit of work against it.
//! Two implementations ship with the crate:
//! - [`MemoryStore`]: everything in process memory
//! - [`JsonFileStore`]: one JSON document on disk, opened and released per call

mod json;
mod memory;
mod tables;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use tables::Tables;

use crate::models::{GameMatch, Player, PlayerId, StandingRow};
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A match referenced a player id that is not registered.
    #[error("no registered player with id {0}")]
    UnknownPlayer(PlayerId),

    /// Players cannot be deleted while match records still reference them.
    #[error("{matches} match record(s) still reference players; delete matches first")]
    PlayersReferenced { matches: usize },
}

/// The relational contract: a `players` relation with storage-assigned ids
/// and a `matches` relation whose columns reference `players.id`.
///
/// Each call is a complete unit of work. A call that returns an error must
/// leave the stored state unchanged.
pub trait Storage {
    /// Insert a player and return the id assigned to it.
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, StorageError>;

    /// Delete every player. Returns the number of rows removed.
    fn delete_players(&mut self) -> Result<usize, StorageError>;

    /// Delete every match. Returns the number of rows removed.
    fn delete_matches(&mut self) -> Result<usize, StorageError>;

    fn count_players(&self) -> Result<usize, StorageError>;

    /// All players in storage order.
    fn players(&self) -> Result<Vec<Player>, StorageError>;

    fn insert_match(&mut self, game: GameMatch) -> Result<(), StorageError>;

    /// Per-player wins and matches played, ordered by wins desc then
    /// matches played desc. Ties keep storage order.
    fn standings(&self) -> Result<Vec<StandingRow>, StorageError>;
}
