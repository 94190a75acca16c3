//! Data structures for the tournament: players, matches, standings, pairings.

mod error;
mod game;
mod player;

pub use error::TournamentError;
pub use game::{GameMatch, Pairing};
pub use player::{Player, PlayerId, StandingRow};
