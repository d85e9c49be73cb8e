//! JSON file repository
//!
//! Writes go to `<path>.tmp` first and are renamed over the save, so a crash
//! mid-write leaves the previous save intact. Failures are logged, never
//! raised: the game keeps running with whatever state it has.

use std::fs;
use std::path::{Path, PathBuf};

use super::GameStateRepository;
use crate::sim::GameState;

/// Persists the current state as a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileGameStateRepository {
    path: PathBuf,
}

impl JsonFileGameStateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn write(&self, state: &GameState) -> std::io::Result<()> {
        let json = serde_json::to_string(state)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

impl GameStateRepository for JsonFileGameStateRepository {
    fn load(&self) -> GameState {
        if let Ok(json) = fs::read_to_string(&self.path) {
            match serde_json::from_str(&json) {
                Ok(state) => return state,
                Err(err) => log::warn!("Corrupt save at {} ({err})", self.path.display()),
            }
        }

        log::info!("No usable save at {}, starting fresh", self.path.display());
        GameState::default()
    }

    fn save(&mut self, state: &GameState) {
        if let Err(err) = self.write(state) {
            log::warn!("Failed to save game to {}: {err}", self.path.display());
        }
    }
}
