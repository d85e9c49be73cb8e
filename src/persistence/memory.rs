//! In-memory repository

use super::GameStateRepository;
use crate::sim::GameState;

/// Keeps the current state in a field
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameStateRepository {
    state: GameState,
    saves: usize,
}

impl InMemoryGameStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state instead of the default one
    pub fn with_state(state: GameState) -> Self {
        Self { state, saves: 0 }
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl GameStateRepository for InMemoryGameStateRepository {
    fn load(&self) -> GameState {
        self.state.clone()
    }

    fn save(&mut self, state: &GameState) {
        self.state = state.clone();
        self.saves += 1;
    }
}
