//! Storage backed by a single JSON document on disk.
//!
//! Every call opens the file, reads or rewrites it, and releases it again.
//! Nothing is cached between calls, so two stores pointing at the same path
//! see each other's writes.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::{Storage, StorageError, Tables};
use crate::models::{GameMatch, Player, PlayerId, StandingRow};

/// JSON-file store. A missing file reads as an empty tournament.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Tables, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Tables::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Write to a sibling temp file, then rename over the target.
    fn save(&self, tables: &Tables) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer(&mut writer, tables)?;
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        debug!("Saved {} players, {} matches to {:?}", tables.players.len(), tables.matches.len(), self.path);
        Ok(())
    }

    /// Load, apply `op`, and save only if `op` succeeded.
    fn update<T>(
        &mut self,
        op: impl FnOnce(&mut Tables) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut tables = self.load()?;
        let out = op(&mut tables)?;
        self.save(&tables)?;
        Ok(out)
    }
}

impl Storage for JsonFileStore {
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, StorageError> {
        self.update(|t| Ok(t.insert_player(name)))
    }

    fn delete_players(&mut self) -> Result<usize, StorageError> {
        self.update(Tables::delete_players)
    }

    fn delete_matches(&mut self) -> Result<usize, StorageError> {
        self.update(|t| Ok(t.delete_matches()))
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.load()?.players.len())
    }

    fn players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.load()?.players)
    }

    fn insert_match(&mut self, game: GameMatch) -> Result<(), StorageError> {
        self.update(|t| t.insert_match(game))
    }

    fn standings(&self) -> Result<Vec<StandingRow>, StorageError> {
        Ok(self.load()?.standings())
    }
}
