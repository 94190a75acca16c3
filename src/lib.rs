//! Swiss-system tournament: player registry, standings and next-round pairings.

pub mod config;
pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    count_players, delete_matches, delete_players, get_players, pair_standings, player_standings,
    register_player, report_match, reset_tournament, swiss_pairings, write_pairings_csv,
    write_standings_csv,
};
pub use models::{GameMatch, Pairing, Player, PlayerId, StandingRow, TournamentError};
pub use storage::{JsonFileStore, MemoryStore, Storage, StorageError};
