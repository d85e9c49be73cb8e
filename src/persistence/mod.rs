//! Game state repositories
//!
//! A session hands every new `GameState` to a repository and reads the
//! current one back from it. Two backends:
//! - In-memory (tests, demo)
//! - JSON file with tmp → save rename

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileGameStateRepository;
pub use memory::InMemoryGameStateRepository;

use crate::sim::GameState;

/// Storage for the single current game state
pub trait GameStateRepository {
    /// Last saved state, or an initial state if nothing was saved yet
    fn load(&self) -> GameState;

    fn save(&mut self, state: &GameState);
}
