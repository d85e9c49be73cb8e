//! Game session: reducer + persistence + level progression
//!
//! The session is the only writer of `GameState`. Each transition is computed
//! by the reducer, adjusted by the level-advance policy, saved to the
//! repository, then published to listeners.

use std::fmt;

use super::reducer::GameReducer;
use super::state::{GameEvent, GameState, GameStatus, LevelId};
use crate::level::LevelBricksProvider;
use crate::persistence::GameStateRepository;
use crate::settings::GameConfig;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GameState)>;

pub struct GameSession<R, P> {
    repository: R,
    reducer: GameReducer,
    level_order: Vec<LevelId>,
    provider: P,
    starting_lives: u32,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<R, P> fmt::Debug for GameSession<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("level_order", &self.level_order)
            .field("starting_lives", &self.starting_lives)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<R: GameStateRepository, P: LevelBricksProvider> GameSession<R, P> {
    pub fn new(
        repository: R,
        reducer: GameReducer,
        level_order: Vec<LevelId>,
        provider: P,
        starting_lives: u32,
    ) -> Self {
        Self {
            repository,
            reducer,
            level_order,
            provider,
            starting_lives,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Build a session from tuning data
    pub fn from_config(repository: R, provider: P, config: &GameConfig) -> Self {
        Self::new(
            repository,
            GameReducer::new(),
            config.level_order.clone(),
            provider,
            config.starting_lives,
        )
    }

    /// Current persisted state
    pub fn state(&self) -> GameState {
        self.repository.load()
    }

    pub fn level_order(&self) -> &[LevelId] {
        &self.level_order
    }

    /// Replace whatever was saved with a fresh game on the first level, then
    /// start it.
    pub fn start_game(&mut self) {
        let first = self.level_order.first().cloned();
        let bricks = first
            .as_ref()
            .map(|level| self.provider.bricks(level))
            .unwrap_or_default();
        let level_id = first.unwrap_or_default();

        log::info!(
            "Starting game on level '{}' ({} bricks, {} lives)",
            level_id,
            bricks.len(),
            self.starting_lives
        );

        let fresh = GameState::new(level_id, self.starting_lives, bricks);
        self.repository.save(&fresh);

        let started = self.reducer.start(&fresh);
        self.commit(started);
    }

    /// Apply one gameplay event
    pub fn handle(&mut self, event: GameEvent) {
        let previous = self.repository.load();
        let reduced = self.reducer.reduce(&previous, &event);
        log::debug!(
            "{:?}: score {} lives {} status {:?}",
            event,
            reduced.score,
            reduced.lives,
            reduced.status
        );

        let next = if previous.is_playing() && reduced.status == GameStatus::Won {
            match self.next_level(&reduced.level_id) {
                Some(level_id) => {
                    let bricks = self.provider.bricks(&level_id);
                    log::info!(
                        "Level '{}' cleared, advancing to '{}' ({} bricks)",
                        reduced.level_id,
                        level_id,
                        bricks.len()
                    );
                    GameState {
                        status: GameStatus::Playing,
                        level_id,
                        bricks,
                        ..reduced
                    }
                }
                None => {
                    log::info!("Final level cleared, game won with score {}", reduced.score);
                    reduced
                }
            }
        } else {
            if previous.is_playing() && reduced.status == GameStatus::GameOver {
                log::info!("Game over with score {}", reduced.score);
            }
            reduced
        };

        self.commit(next);
    }

    /// The presentation layer has begun the ball reset sequence
    pub fn announce_ball_reset_in_progress(&mut self) {
        let next = self
            .reducer
            .announced_ball_reset_in_progress(&self.repository.load());
        self.commit(next);
    }

    /// The presentation layer has finished the ball reset sequence
    pub fn acknowledge_ball_reset(&mut self) {
        let next = self.reducer.acknowledge_ball_reset(&self.repository.load());
        self.commit(next);
    }

    /// Register a listener called with every persisted state
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the handle was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Level after `current` in the configured order. A level missing from
    /// the order has no successor.
    fn next_level(&self, current: &LevelId) -> Option<LevelId> {
        let index = self.level_order.iter().position(|l| l == current)?;
        self.level_order.get(index + 1).cloned()
    }

    fn commit(&mut self, state: GameState) {
        self.repository.save(&state);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&state);
        }
    }
}
