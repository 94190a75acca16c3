//! Tournament business logic: registry, standings and pairings, export.

mod export;
mod pairing;
mod registry;

pub use export::{write_pairings_csv, write_standings_csv};
pub use pairing::{pair_standings, player_standings, swiss_pairings};
pub use registry::{
    count_players, delete_matches, delete_players, get_players, register_player, report_match,
    reset_tournament,
};
