//! Game tuning
//!
//! Data-driven balance values. Callers supply the JSON text; where it comes
//! from is up to them.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::LevelId;

/// Gameplay tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lives at the start of a game
    pub starting_lives: u32,
    /// Paddle travel speed (points per second)
    pub paddle_speed: f32,
    /// Ball radius, used when clamping the ball onto the paddle
    pub ball_radius: f32,
    /// Upward launch speed (points per second)
    pub launch_speed: f32,
    /// Frames the ball stays hidden during a reset
    pub reset_delay_ticks: u32,
    /// Order levels are played in
    pub level_order: Vec<LevelId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            launch_speed: BALL_LAUNCH_SPEED,
            reset_delay_ticks: RESET_DELAY_TICKS,
            level_order: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Parse tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.starting_lives == 0 {
            return Err(ConfigError::InvalidStartingLives);
        }
        Ok(config)
    }

    /// Replace the level order (e.g. with a catalog's load order)
    pub fn with_level_order(mut self, order: impl IntoIterator<Item = LevelId>) -> Self {
        self.level_order = order.into_iter().collect();
        self
    }
}
