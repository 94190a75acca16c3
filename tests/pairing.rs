//! Integration tests for standings and Swiss pairings.

use std::collections::HashSet;
use swiss_tournament::{
    player_standings, register_player, report_match, swiss_pairings, JsonFileStore, MemoryStore,
    Storage, TournamentError,
};

fn register_all<S: Storage>(store: &mut S, names: &[&str]) {
    for name in names {
        register_player(store, name).unwrap();
    }
}

#[test]
fn fresh_players_all_have_zero_records() {
    let mut store = MemoryStore::new();
    register_all(&mut store, &["A", "B", "C", "D", "E"]);

    let standings = player_standings(&store).unwrap();
    assert_eq!(standings.len(), 5);
    assert!(standings.iter().all(|r| r.wins == 0 && r.matches_played == 0));
}

#[test]
fn standings_sorted_by_wins_then_matches_played() {
    let mut store = MemoryStore::new();
    register_all(&mut store, &["A", "B", "C", "D", "E", "F"]);
    report_match(&mut store, 1, 2).unwrap();
    report_match(&mut store, 1, 3).unwrap();
    report_match(&mut store, 4, 5).unwrap();
    report_match(&mut store, 3, 6).unwrap();

    let standings = player_standings(&store).unwrap();
    for w in standings.windows(2) {
        assert!(
            (w[0].wins, w[0].matches_played) >= (w[1].wins, w[1].matches_played),
            "{:?} ranked above {:?}",
            w[0],
            w[1]
        );
    }
    assert_eq!(standings[0].id, 1);
    assert_eq!((standings[0].wins, standings[0].matches_played), (2, 2));
    // C is 1-1, D is 1-0: equal wins, more matches played ranks higher
    assert_eq!(standings[1].id, 3);
    assert_eq!(standings[2].id, 4);
}

#[test]
fn four_player_scenario_groups_by_score_tier() {
    let mut store = MemoryStore::new();
    register_all(&mut store, &["A", "B", "C", "D"]);
    report_match(&mut store, 1, 2).unwrap();
    report_match(&mut store, 3, 4).unwrap();

    let standings = player_standings(&store).unwrap();
    let top: HashSet<_> = standings[..2].iter().map(|r| r.id).collect();
    let bottom: HashSet<_> = standings[2..].iter().map(|r| r.id).collect();
    assert_eq!(top, HashSet::from([1, 3]));
    assert_eq!(bottom, HashSet::from([2, 4]));

    let pairings = swiss_pairings(&store).unwrap();
    assert_eq!(pairings.len(), 2);
    let tiers: Vec<HashSet<_>> = pairings
        .iter()
        .map(|p| HashSet::from([p.first.id, p.second.id]))
        .collect();
    assert_eq!(tiers[0], HashSet::from([1, 3]));
    assert_eq!(tiers[1], HashSet::from([2, 4]));
}

#[test]
fn pairings_cover_every_player_once_with_adjacent_standings() {
    let mut store = MemoryStore::new();
    register_all(&mut store, &["A", "B", "C", "D", "E", "F", "G", "H"]);
    report_match(&mut store, 1, 2).unwrap();
    report_match(&mut store, 3, 4).unwrap();
    report_match(&mut store, 5, 6).unwrap();
    report_match(&mut store, 7, 8).unwrap();
    report_match(&mut store, 1, 3).unwrap();

    let standings = player_standings(&store).unwrap();
    let pairings = swiss_pairings(&store).unwrap();
    assert_eq!(pairings.len(), 4);

    let mut seen = HashSet::new();
    for (k, p) in pairings.iter().enumerate() {
        assert_ne!(p.first.id, p.second.id);
        assert_eq!(p.first.id, standings[2 * k].id);
        assert_eq!(p.second.id, standings[2 * k + 1].id);
        assert_eq!(p.first.name, standings[2 * k].name);
        assert!(seen.insert(p.first.id));
        assert!(seen.insert(p.second.id));
    }
    assert_eq!(seen, (1..=8).collect::<HashSet<_>>());
}

#[test]
fn odd_player_count_cannot_be_paired() {
    let mut store = MemoryStore::new();
    register_all(&mut store, &["A", "B", "C"]);
    assert!(matches!(
        swiss_pairings(&store),
        Err(TournamentError::OddPlayerCount(3))
    ));
}

#[test]
fn no_players_means_no_pairings() {
    let store = MemoryStore::new();
    assert!(swiss_pairings(&store).unwrap().is_empty());
}

#[test]
fn json_store_pairs_like_memory_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("swiss.json"));
    register_all(&mut store, &["A", "B", "C", "D"]);
    report_match(&mut store, 4, 1).unwrap();
    report_match(&mut store, 2, 3).unwrap();

    let pairings = swiss_pairings(&store).unwrap();
    let tiers: Vec<HashSet<_>> = pairings
        .iter()
        .map(|p| HashSet::from([p.first.id, p.second.id]))
        .collect();
    assert_eq!(tiers, vec![HashSet::from([2, 4]), HashSet::from([1, 3])]);
}
