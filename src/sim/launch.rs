//! Ball attachment and launch
//!
//! The ball is either clamped (riding on the paddle, waiting for launch) or
//! launched (free). Resets hide the ball and strip its collision categories
//! for the length of the reset delay, then restore them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::category;
use super::paddle::Paddle;
use crate::consts::*;

/// Physics-side view of the ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub radius: f32,
    /// What the ball is
    pub category_bits: u32,
    /// What the ball reports contacts with
    pub contact_bits: u32,
    /// What the ball bounces off
    pub collision_bits: u32,
    pub visible: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(BALL_RADIUS)
    }
}

impl Ball {
    pub const CATEGORY: u32 = category::BALL;
    pub const CONTACTS: u32 = category::BRICK | category::GUTTER | category::PADDLE;
    pub const COLLISIONS: u32 = category::BRICK | category::PADDLE | category::WALL;

    pub fn new(radius: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            radius,
            category_bits: Self::CATEGORY,
            contact_bits: Self::CONTACTS,
            collision_bits: Self::COLLISIONS,
            visible: true,
        }
    }

    /// True when the ball takes part in physics
    pub fn is_interactive(&self) -> bool {
        self.category_bits != category::NONE
    }

    fn disable_physics(&mut self) {
        self.category_bits = category::NONE;
        self.contact_bits = category::NONE;
        self.collision_bits = category::NONE;
    }

    fn restore_physics(&mut self) {
        self.category_bits = Self::CATEGORY;
        self.contact_bits = Self::CONTACTS;
        self.collision_bits = Self::COLLISIONS;
        self.visible = true;
    }

    fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
        self.angular_velocity = 0.0;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallLaunchState {
    /// Riding on the paddle
    #[default]
    Clamped,
    /// Free-moving
    Launched,
}

#[derive(Debug, Clone)]
pub struct BallLaunchController {
    state: BallLaunchState,
    launch_speed: f32,
}

impl Default for BallLaunchController {
    fn default() -> Self {
        Self::new(BALL_LAUNCH_SPEED)
    }
}

impl BallLaunchController {
    pub fn new(launch_speed: f32) -> Self {
        Self {
            state: BallLaunchState::Clamped,
            launch_speed,
        }
    }

    pub fn state(&self) -> BallLaunchState {
        self.state
    }

    /// Attach the ball to the top of the paddle
    pub fn clamp(&mut self, ball: &mut Ball, paddle: &Paddle) {
        self.state = BallLaunchState::Clamped;
        ball.velocity = Vec2::ZERO;
        ball.position = Vec2::new(paddle.x, paddle.top() + ball.radius);
    }

    /// Release the ball straight up
    pub fn launch(&mut self, ball: &mut Ball) {
        self.state = BallLaunchState::Launched;
        ball.velocity = Vec2::new(0.0, self.launch_speed);
    }

    /// Per-frame: a clamped ball follows the paddle
    pub fn update(&mut self, ball: &mut Ball, paddle: &Paddle) {
        match self.state {
            BallLaunchState::Clamped => self.clamp(ball, paddle),
            BallLaunchState::Launched => {}
        }
    }

    /// Hide the ball and take it out of the physics world during a reset delay
    pub fn prepare_reset(&mut self, ball: &mut Ball) {
        ball.disable_physics();
        ball.visible = false;
    }

    /// Put the ball back at `position`, clamped and waiting for launch
    pub fn perform_reset(&mut self, ball: &mut Ball, position: Vec2) {
        self.state = BallLaunchState::Clamped;
        Self::respawn(ball, position);
    }

    /// Put the ball back at `position` as a free ball
    pub fn perform_world_reset(&mut self, ball: &mut Ball, position: Vec2) {
        self.state = BallLaunchState::Launched;
        Self::respawn(ball, position);
    }

    /// Put the ball back on the paddle
    pub fn perform_paddle_reset(&mut self, ball: &mut Ball, paddle: &Paddle) {
        self.clamp(ball, paddle);
        ball.angular_velocity = 0.0;
        ball.restore_physics();
    }

    fn respawn(ball: &mut Ball, position: Vec2) {
        ball.position = position;
        ball.halt();
        ball.restore_physics();
    }
}
