//! Deterministic gameplay module
//!
//! All gameplay rules live here. This module must stay pure and deterministic:
//! - State transitions build new values, never mutate in place
//! - Events are applied in the order received
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod launch;
pub mod paddle;
pub mod reducer;
pub mod reset;
pub mod session;
pub mod state;

pub use collision::{CollisionOutcome, ContactBody, category, classify};
pub use launch::{Ball, BallLaunchController, BallLaunchState};
pub use paddle::{MotionIntent, Paddle, PaddleMotionController};
pub use reducer::GameReducer;
pub use reset::{BallResetSequencer, ResetMode};
pub use session::{GameSession, ListenerId};
pub use state::{Brick, BrickColor, BrickId, GameEvent, GameState, GameStatus, LevelId, brick_map};
