//! Contact classification
//!
//! The physics engine reports contacts as two bodies with category bitmasks.
//! This turns one contact into a gameplay outcome. Which body is "A" and
//! which is "B" does not matter.

use super::state::{BrickId, GameEvent};

/// Physics category bits (one bit per kind of body)
pub mod category {
    pub const NONE: u32 = 0;
    pub const BALL: u32 = 1 << 0;
    pub const BRICK: u32 = 1 << 1;
    pub const GUTTER: u32 = 1 << 2;
    pub const PADDLE: u32 = 1 << 3;
    /// Scene walls. Contact with them has no gameplay meaning.
    pub const WALL: u32 = 1 << 4;
}

/// One side of a reported contact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBody {
    pub category: u32,
    /// Node name, if the body has one (bricks are named by their id)
    pub name: Option<String>,
}

impl ContactBody {
    pub fn new(category: u32) -> Self {
        Self {
            category,
            name: None,
        }
    }

    pub fn named(category: u32, name: impl Into<String>) -> Self {
        Self {
            category,
            name: Some(name.into()),
        }
    }
}

/// Gameplay meaning of a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionOutcome {
    BallHitBrick(BrickId),
    BallHitGutter,
    BallHitPaddle,
    None,
}

impl CollisionOutcome {
    /// Event to feed the session, if the contact affects score or lives
    pub fn game_event(&self) -> Option<GameEvent> {
        match self {
            CollisionOutcome::BallHitBrick(id) => Some(GameEvent::BrickHit(id.clone())),
            CollisionOutcome::BallHitGutter => Some(GameEvent::BallLost),
            CollisionOutcome::BallHitPaddle | CollisionOutcome::None => None,
        }
    }
}

/// Classify a single contact between two bodies
pub fn classify(a: &ContactBody, b: &ContactBody) -> CollisionOutcome {
    use category::*;

    let combined = a.category | b.category;

    if combined == BALL | BRICK {
        let brick = if a.category & BRICK != 0 { a } else { b };
        // An unnamed brick can't be tracked, so the contact is dropped
        return match &brick.name {
            Some(name) => CollisionOutcome::BallHitBrick(BrickId::new(name.as_str())),
            None => CollisionOutcome::None,
        };
    }

    if combined == BALL | GUTTER {
        return CollisionOutcome::BallHitGutter;
    }

    if combined == BALL | PADDLE {
        return CollisionOutcome::BallHitPaddle;
    }

    CollisionOutcome::None
}
