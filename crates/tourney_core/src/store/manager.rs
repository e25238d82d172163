//! File-backed tournament store.
//!
//! One `TournamentStore` owns the path of one sport's backing file and
//! moves whole tournaments in and out of it. Loading follows the legacy
//! contract: a missing file is a normal first run, and a file that fails
//! to decode is discarded in favour of an empty tournament rather than
//! taking the process down.

use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::format;
use crate::models::Sport;
use crate::tournament::Tournament;

#[derive(Debug, Clone)]
pub struct TournamentStore {
    path: PathBuf,
}

impl TournamentStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional file name for `sport` under `dir`
    /// (`cricket.txt`, `football.txt`, `basketball.txt`).
    pub fn for_sport(dir: impl AsRef<Path>, sport: Sport) -> Self {
        Self { path: dir.as_ref().join(sport.store_file()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the tournament, falling back to an empty one.
    ///
    /// Never fails: no file means a first run, and undecodable content is
    /// dropped with a warning. Callers that need to distinguish the cases
    /// use [`load_strict`](Self::load_strict).
    pub fn load(&self, sport: Sport) -> Tournament {
        match self.load_strict(sport) {
            Ok(Some(tournament)) => {
                log::info!(
                    "Loaded {} teams, {} fixtures from {:?}",
                    tournament.teams().len(),
                    tournament.fixtures().len(),
                    self.path
                );
                tournament
            }
            Ok(None) => {
                log::debug!("No store file at {:?}, starting empty", self.path);
                Tournament::new(sport)
            }
            Err(err) => {
                log::warn!("Discarding store at {:?}: {}", self.path, err);
                Tournament::new(sport)
            }
        }
    }

    /// Load without the fallback. `Ok(None)` means no file exists.
    pub fn load_strict(&self, sport: Sport) -> Result<Option<Tournament>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut text = String::new();
        File::open(&self.path)?.read_to_string(&mut text)?;

        let snapshot = format::decode(&text)?;
        let tournament = Tournament::from_snapshot(sport, &snapshot)?;

        log::debug!("Loaded {} bytes from {:?}", text.len(), self.path);
        Ok(Some(tournament))
    }

    /// Serialize and write the tournament.
    pub fn save(&self, tournament: &Tournament) -> Result<(), StoreError> {
        let text = format::encode(&tournament.to_snapshot())?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Atomic save: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(text.as_bytes())?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }
        rename(&temp_path, &self.path)?;

        log::debug!("Saved {} bytes to {:?}", text.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreSheet;
    use tempfile::TempDir;

    fn sample(sport: Sport) -> Tournament {
        let mut t = Tournament::new(sport);
        let leeds = t.add_team("Leeds");
        let york = t.add_team("York");
        t.add_player(leeds, "Meslier", "Goalkeeper", 1).unwrap();
        let id = t.schedule_fixture(leeds, york, "2025-04-01", "15:00", "Elland Road").unwrap();
        t.record_result(id, ScoreSheet::Football { home_goals: 2, away_goals: 1 }).unwrap();
        t
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = TournamentStore::for_sport(dir.path(), Sport::Football);

        let original = sample(Sport::Football);
        store.save(&original).unwrap();

        let loaded = store.load_strict(Sport::Football).unwrap().unwrap();
        assert_eq!(loaded.to_snapshot(), original.to_snapshot());
        assert_eq!(loaded.standings(), original.standings());
    }

    #[test]
    fn test_for_sport_uses_conventional_names() {
        let dir = TempDir::new().unwrap();
        for sport in Sport::all() {
            let store = TournamentStore::for_sport(dir.path(), sport);
            assert_eq!(store.path(), dir.path().join(sport.store_file()));
        }
    }

    #[test]
    fn test_missing_file_is_first_run() {
        let dir = TempDir::new().unwrap();
        let store = TournamentStore::for_sport(dir.path(), Sport::Cricket);

        assert!(!store.exists());
        assert!(store.load_strict(Sport::Cricket).unwrap().is_none());

        let tournament = store.load(Sport::Cricket);
        assert!(tournament.teams().is_empty());
        assert!(tournament.fixtures().is_empty());
    }

    #[test]
    fn test_undecodable_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("football.txt");
        std::fs::write(&path, "not a number\n").unwrap();

        let store = TournamentStore::new(&path);
        assert!(store.load_strict(Sport::Football).is_err());

        let tournament = store.load(Sport::Football);
        assert!(tournament.teams().is_empty());
    }

    #[test]
    fn test_inconsistent_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("football.txt");
        // one team, but the match references team index 3
        std::fs::write(&path, "1\nLeeds\n0\n1\n1\n0\n3\nd\nt\nv\n0\n-1\n0\n\n2\n").unwrap();

        let store = TournamentStore::new(&path);
        let err = store.load_strict(Sport::Football).unwrap_err();
        assert!(err.is_corrupt());
        assert!(store.load(Sport::Football).teams().is_empty());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = TournamentStore::for_sport(dir.path(), Sport::Basketball);
        store.save(&sample(Sport::Basketball)).unwrap();

        assert!(store.exists());
        assert!(!dir.path().join("basketball.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = TournamentStore::for_sport(dir.path(), Sport::Football);

        store.save(&sample(Sport::Football)).unwrap();
        let mut smaller = Tournament::new(Sport::Football);
        smaller.add_team("Solo");
        store.save(&smaller).unwrap();

        let loaded = store.load_strict(Sport::Football).unwrap().unwrap();
        assert_eq!(loaded.teams().len(), 1);
        assert_eq!(loaded.teams()[0].name, "Solo");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = TournamentStore::new(dir.path().join("deep").join("cricket.txt"));
        store.save(&Tournament::new(Sport::Cricket)).unwrap();
        assert!(store.exists());
    }
}
