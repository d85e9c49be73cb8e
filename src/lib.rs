//! Brick Breaker - deterministic Breakout gameplay core
//!
//! Core modules:
//! - `sim`: Game state, reducer, session, collision routing, paddle/ball controllers
//! - `level`: Level layouts and brick generation
//! - `persistence`: Game state repositories
//! - `settings`: Data-driven game tuning
//! - `error`: Configuration error types

pub mod error;
pub mod level;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, LevelError};
pub use level::{LevelBricksProvider, LevelCatalog, LevelLayout};
pub use persistence::{GameStateRepository, InMemoryGameStateRepository, JsonFileGameStateRepository};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the presentation loop drives the controllers at
    pub const FRAME_RATE: u32 = 60;

    /// Lives at the start of a new game
    pub const STARTING_LIVES: u32 = 3;

    /// Paddle defaults
    pub const PADDLE_SPEED: f32 = 400.0; // points per second
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_LAUNCH_SPEED: f32 = 300.0;

    /// Frames the ball stays hidden between a lost life and its respawn (1 second)
    pub const RESET_DELAY_TICKS: u32 = FRAME_RATE;

    /// Brick point values
    pub const RED_POINTS: u64 = 7;
    pub const ORANGE_POINTS: u64 = 7;
    pub const YELLOW_POINTS: u64 = 4;
    pub const GREEN_POINTS: u64 = 1;
}
