//! Game state and core domain types
//!
//! Everything a repository persists lives here. `GameState` is replaced on
//! every transition, never edited in place.

use std::collections::HashMap;
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LevelError;

/// Unique brick identifier (compared by value)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrickId(String);

impl BrickId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BrickId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for BrickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Level identifier. Levels have no intrinsic order; sessions are handed an
/// explicit `level_order`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(String);

impl LevelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LevelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Brick colors, each worth a fixed number of points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl BrickColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrickColor::Red => "red",
            BrickColor::Orange => "orange",
            BrickColor::Yellow => "yellow",
            BrickColor::Green => "green",
        }
    }

    /// Resolve a layout color name
    pub fn from_name(name: &str) -> Result<Self, LevelError> {
        match name.to_lowercase().as_str() {
            "red" => Ok(BrickColor::Red),
            "orange" => Ok(BrickColor::Orange),
            "yellow" => Ok(BrickColor::Yellow),
            "green" => Ok(BrickColor::Green),
            _ => Err(LevelError::UnknownColor(name.to_string())),
        }
    }

    pub fn point_value(&self) -> u64 {
        match self {
            BrickColor::Red => RED_POINTS,
            BrickColor::Orange => ORANGE_POINTS,
            BrickColor::Yellow => YELLOW_POINTS,
            BrickColor::Green => GREEN_POINTS,
        }
    }
}

/// A brick in the current level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    pub color: BrickColor,
    pub position: Vec2,
}

impl Brick {
    pub fn new(id: impl Into<String>, color: BrickColor, position: Vec2) -> Self {
        Self {
            id: BrickId::new(id),
            color,
            position,
        }
    }

    /// Points awarded for destroying this brick
    pub fn value(&self) -> u64 {
        self.color.point_value()
    }
}

/// Overall game status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created but not started
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// All bricks cleared. Terminal only when no further level exists.
    Won,
    /// Out of lives
    GameOver,
}

/// Domain events fed to the reducer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    BrickHit(BrickId),
    BallLost,
}

/// Snapshot of one in-progress game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    pub lives: u32,
    pub status: GameStatus,
    pub level_id: LevelId,
    pub bricks: HashMap<BrickId, Brick>,
    /// A lost life needs the ball put back into play
    pub ball_reset_needed: bool,
    /// The presentation layer has begun (but not finished) the reset
    pub ball_reset_in_progress: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(LevelId::default(), STARTING_LIVES, HashMap::new())
    }
}

impl GameState {
    /// Fresh idle state for a level
    pub fn new(level_id: LevelId, lives: u32, bricks: HashMap<BrickId, Brick>) -> Self {
        Self {
            score: 0,
            lives,
            status: GameStatus::Idle,
            level_id,
            bricks,
            ball_reset_needed: false,
            ball_reset_in_progress: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Structural invariants every reachable state satisfies
    pub fn invariants_hold(&self) -> bool {
        let playing_has_lives = self.status != GameStatus::Playing || self.lives > 0;
        let single_reset_phase = !(self.ball_reset_needed && self.ball_reset_in_progress);
        playing_has_lives && single_reset_phase
    }
}

/// Build a brick map keyed by id
pub fn brick_map(bricks: impl IntoIterator<Item = Brick>) -> HashMap<BrickId, Brick> {
    bricks.into_iter().map(|b| (b.id.clone(), b)).collect()
}
