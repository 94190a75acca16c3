//! CSV export of standings and pairings.

use crate::models::{Pairing, StandingRow};
use std::io::Write;

/// Write `id,name,wins,matches_played` rows in standings order.
pub fn write_standings_csv<W: Write>(standings: &[StandingRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in standings {
        wtr.serialize(row)?;
    }
    // serialize() only emits a header with the first record
    if standings.is_empty() {
        wtr.write_record(["id", "name", "wins", "matches_played"])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `id1,name1,id2,name2` rows, one per pairing.
pub fn write_pairings_csv<W: Write>(pairings: &[Pairing], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id1", "name1", "id2", "name2"])?;
    for p in pairings {
        let (id1, name1, id2, name2) = p.to_tuple();
        wtr.write_record([id1.to_string().as_str(), name1, id2.to_string().as_str(), name2])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    #[test]
    fn standings_csv_has_header_and_rows() {
        let rows = vec![
            StandingRow { id: 2, name: "Bob".into(), wins: 1, matches_played: 1 },
            StandingRow { id: 1, name: "Smith, Ann".into(), wins: 0, matches_played: 1 },
        ];
        let mut out = Vec::new();
        write_standings_csv(&rows, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,name,wins,matches_played\n2,Bob,1,1\n1,\"Smith, Ann\",0,1\n"
        );
    }

    #[test]
    fn empty_standings_csv_still_has_header() {
        let mut out = Vec::new();
        write_standings_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "id,name,wins,matches_played\n");
    }

    #[test]
    fn pairings_csv_uses_flat_tuple_columns() {
        let pairings = vec![Pairing::new(Player::new(1, "A"), Player::new(3, "C"))];
        let mut out = Vec::new();
        write_pairings_csv(&pairings, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "id1,name1,id2,name2\n1,A,3,C\n");
    }
}
