//! Errors returned by registry and pairing operations.

use crate::models::player::PlayerId;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Storage rejected or failed the unit of work.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A player cannot be reported as beating themselves.
    #[error("player {0} cannot play a match against themselves")]
    InvalidMatch(PlayerId),

    /// Swiss pairing needs an even number of players; byes are not supported.
    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),
}
