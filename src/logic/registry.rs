//! Player and match records: registration, reset, counting, result reporting.

use crate::models::{GameMatch, Player, PlayerId, TournamentError};
use crate::storage::Storage;
use log::{debug, info};

/// Register a player and return the id storage assigned.
/// Names are taken as given: empty and duplicate names are allowed.
pub fn register_player<S: Storage + ?Sized>(
    store: &mut S,
    name: &str,
) -> Result<PlayerId, TournamentError> {
    let id = store.insert_player(name)?;
    debug!("Registered player {} ({:?})", id, name);
    Ok(id)
}

/// Remove every player. Fails while match records still exist.
pub fn delete_players<S: Storage + ?Sized>(store: &mut S) -> Result<usize, TournamentError> {
    let removed = store.delete_players()?;
    debug!("Deleted {} player(s)", removed);
    Ok(removed)
}

/// Remove every match record. Players stay registered.
pub fn delete_matches<S: Storage + ?Sized>(store: &mut S) -> Result<usize, TournamentError> {
    let removed = store.delete_matches()?;
    debug!("Deleted {} match(es)", removed);
    Ok(removed)
}

/// Full reset: matches first, then players.
pub fn reset_tournament<S: Storage + ?Sized>(store: &mut S) -> Result<(), TournamentError> {
    let matches = delete_matches(store)?;
    let players = delete_players(store)?;
    info!("Tournament reset: removed {} match(es) and {} player(s)", matches, players);
    Ok(())
}

pub fn count_players<S: Storage + ?Sized>(store: &S) -> Result<usize, TournamentError> {
    Ok(store.count_players()?)
}

/// All registered players in storage order.
pub fn get_players<S: Storage + ?Sized>(store: &S) -> Result<Vec<Player>, TournamentError> {
    Ok(store.players()?)
}

/// Record that `winner` beat `loser`.
///
/// Self-matches are refused here. Unknown ids are left to storage, which
/// rejects them with [`crate::storage::StorageError::UnknownPlayer`].
pub fn report_match<S: Storage + ?Sized>(
    store: &mut S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<(), TournamentError> {
    if winner == loser {
        return Err(TournamentError::InvalidMatch(winner));
    }
    store.insert_match(GameMatch::new(winner, loser))?;
    debug!("Recorded match: {} beat {}", winner, loser);
    Ok(())
}
