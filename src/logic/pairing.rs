//! Standings and next-round Swiss pairings.

use crate::models::{Pairing, StandingRow, TournamentError};
use crate::storage::Storage;
use log::warn;

/// All players with their wins and matches played, best record first.
///
/// Ordered by wins descending, then matches played descending. Players tied
/// on both keep the order storage returned them in.
pub fn player_standings<S: Storage + ?Sized>(store: &S) -> Result<Vec<StandingRow>, TournamentError> {
    let mut standings = store.standings()?;
    // Stable, so storage order survives for ties.
    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.matches_played.cmp(&a.matches_played))
    });
    Ok(standings)
}

/// Pair the current standings for the next round: 1st with 2nd, 3rd with 4th, ...
///
/// Needs an even number of players; there are no byes.
pub fn swiss_pairings<S: Storage + ?Sized>(store: &S) -> Result<Vec<Pairing>, TournamentError> {
    pair_standings(&player_standings(store)?)
}

/// Pair an already ordered standings list.
pub fn pair_standings(standings: &[StandingRow]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        warn!("Refusing to pair {} players: odd count", standings.len());
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }
    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(pair[0].player(), pair[1].player()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, wins: u32, matches_played: u32) -> StandingRow {
        StandingRow {
            id,
            name: format!("P{id}"),
            wins,
            matches_played,
        }
    }

    #[test]
    fn pairs_adjacent_rows_in_order() {
        let rows = vec![row(5, 2, 2), row(1, 2, 2), row(3, 1, 2), row(2, 0, 2)];
        let ids: Vec<_> = pair_standings(&rows).unwrap().iter().map(Pairing::ids).collect();
        assert_eq!(ids, vec![(5, 1), (3, 2)]);
    }

    #[test]
    fn empty_standings_give_no_pairings() {
        assert!(pair_standings(&[]).unwrap().is_empty());
    }

    #[test]
    fn odd_count_is_an_error() {
        let rows = vec![row(1, 0, 0), row(2, 0, 0), row(3, 0, 0)];
        assert!(matches!(
            pair_standings(&rows),
            Err(TournamentError::OddPlayerCount(3))
        ));
    }
}
