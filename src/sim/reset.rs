//! Frame-driven ball reset
//!
//! Drives the reset protocol from the presentation loop: when the session
//! asks for a reset the ball is hidden, a countdown runs for a fixed number
//! of frames, then the ball is respawned and the reset acknowledged. Nothing
//! blocks; each call to `step` is one frame.

use glam::Vec2;

use super::launch::{Ball, BallLaunchController};
use super::paddle::Paddle;
use super::session::GameSession;
use crate::level::LevelBricksProvider;
use crate::persistence::GameStateRepository;

/// Where the ball comes back after a reset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResetMode {
    /// Back on the paddle, waiting for launch
    Paddle,
    /// At a fixed point, waiting for launch
    Position(Vec2),
    /// At a fixed point, already in play
    World(Vec2),
}

#[derive(Debug, Clone)]
pub struct BallResetSequencer {
    delay_ticks: u32,
    mode: ResetMode,
    /// Frames left before the respawn, while a reset is running
    pending: Option<u32>,
}

impl BallResetSequencer {
    pub fn new(delay_ticks: u32, mode: ResetMode) -> Self {
        Self {
            delay_ticks,
            mode,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance one frame
    pub fn step<R, P>(
        &mut self,
        session: &mut GameSession<R, P>,
        launcher: &mut BallLaunchController,
        ball: &mut Ball,
        paddle: &Paddle,
    ) where
        R: GameStateRepository,
        P: LevelBricksProvider,
    {
        if let Some(remaining) = self.pending {
            if remaining > 1 {
                self.pending = Some(remaining - 1);
                return;
            }
            self.pending = None;
            match self.mode {
                ResetMode::Paddle => launcher.perform_paddle_reset(ball, paddle),
                ResetMode::Position(at) => launcher.perform_reset(ball, at),
                ResetMode::World(at) => launcher.perform_world_reset(ball, at),
            }
            session.acknowledge_ball_reset();
            log::debug!("Ball reset complete");
            return;
        }

        if session.state().ball_reset_needed {
            session.announce_ball_reset_in_progress();
            launcher.prepare_reset(ball);
            self.pending = Some(self.delay_ticks.max(1));
            log::debug!("Ball reset started ({} frame delay)", self.delay_ticks);
            return;
        }

        launcher.update(ball, paddle);
    }
}
