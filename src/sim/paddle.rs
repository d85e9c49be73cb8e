//! Paddle model and per-frame motion
//!
//! Two input sources drive the paddle: a held direction (keys) and an
//! absolute position (drag). While a drag is active it wins; the held
//! direction is remembered and resumes once the drag ends.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The player's paddle (centre position and size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.w / 2.0
    }

    /// Top edge, where a resting ball sits
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn moved_by(&self, delta: f32) -> Self {
        Self {
            x: self.x + delta,
            ..*self
        }
    }

    pub fn moved_to(&self, x: f32) -> Self {
        Self { x, ..*self }
    }

    /// Keep the whole paddle inside `[0, scene_width]`
    fn clamped(&self, scene_width: f32) -> Self {
        let min = self.half_width();
        let max = scene_width - self.half_width();
        if min > max {
            // Scene narrower than the paddle
            return self.moved_to(scene_width / 2.0);
        }
        self.moved_to(self.x.clamp(min, max))
    }
}

/// Held direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionIntent {
    #[default]
    None,
    Left,
    Right,
}

impl MotionIntent {
    fn sign(&self) -> f32 {
        match self {
            MotionIntent::None => 0.0,
            MotionIntent::Left => -1.0,
            MotionIntent::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaddleMotionController {
    speed: f32,
    intent: MotionIntent,
    overriding: bool,
}

impl Default for PaddleMotionController {
    fn default() -> Self {
        Self::new(PADDLE_SPEED)
    }
}

impl PaddleMotionController {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            intent: MotionIntent::None,
            overriding: false,
        }
    }

    pub fn intent(&self) -> MotionIntent {
        self.intent
    }

    pub fn is_overriding(&self) -> bool {
        self.overriding
    }

    pub fn start_left(&mut self) {
        self.intent = MotionIntent::Left;
    }

    pub fn start_right(&mut self) {
        self.intent = MotionIntent::Right;
    }

    pub fn stop(&mut self) {
        self.intent = MotionIntent::None;
    }

    /// Advance the paddle by one frame of held-direction motion
    pub fn update(&self, paddle: &Paddle, dt: f32, scene_width: f32) -> Paddle {
        if self.overriding {
            return *paddle;
        }
        paddle
            .moved_by(self.intent.sign() * self.speed * dt)
            .clamped(scene_width)
    }

    /// Jump the paddle to an absolute x (drag). Held direction is kept.
    pub fn override_position(&mut self, paddle: &Paddle, x: f32, scene_width: f32) -> Paddle {
        self.overriding = true;
        paddle.moved_to(x).clamped(scene_width)
    }

    pub fn end_override(&mut self) {
        self.overriding = false;
    }
}
