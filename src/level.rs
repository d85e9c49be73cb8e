//! Level layouts and brick generation
//!
//! Layouts are JSON documents describing a row-major brick grid. The catalog
//! turns them into per-level brick sets and serves them to a session.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::sim::state::{Brick, BrickColor, BrickId, LevelId};

/// Source of the brick set for a level
pub trait LevelBricksProvider {
    /// Bricks for `level`, or an empty map when the level is unknown
    fn bricks(&self, level: &LevelId) -> HashMap<BrickId, Brick>;
}

/// A brick type referenced from the layout grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickType {
    pub id: u32,
    pub color_name: String,
    /// Informational only; scoring always follows the color
    pub score_value: u32,
}

/// Level layout document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelLayout {
    pub level_name: String,
    pub map_cols: u32,
    pub map_rows: u32,
    pub start_x: f32,
    pub start_y: f32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub spacing: f32,
    pub row_spacing: f32,
    pub brick_types: Vec<BrickType>,
    /// Row-major grid: 0 = empty cell, >0 = brick type id
    pub layout: Vec<u32>,
}

impl LevelLayout {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level_id(&self) -> LevelId {
        LevelId::new(self.level_name.clone())
    }

    /// Generate the brick set for this layout.
    ///
    /// Cells naming a brick type that isn't declared are skipped. An
    /// unrecognised color name fails the whole layout.
    pub fn bricks(&self) -> Result<HashMap<BrickId, Brick>, LevelError> {
        if self.map_cols == 0 {
            return Err(LevelError::InvalidGrid);
        }

        let mut bricks = HashMap::new();
        for (index, &type_id) in self.layout.iter().enumerate() {
            if type_id == 0 {
                continue;
            }
            let Some(brick_type) = self.brick_types.iter().find(|t| t.id == type_id) else {
                continue;
            };

            let cols = self.map_cols as usize;
            let row = index / cols;
            let col = index % cols;
            let x = self.start_x + col as f32 * (self.brick_width + self.spacing);
            let y = self.start_y - row as f32 * self.row_spacing;

            let color = BrickColor::from_name(&brick_type.color_name)?;
            let brick = Brick::new(
                format!("{}-r{}-c{}", self.level_name, row, col),
                color,
                Vec2::new(x, y),
            );
            bricks.insert(brick.id.clone(), brick);
        }

        Ok(bricks)
    }
}

/// Brick sets for every loaded level, in load order
#[derive(Debug, Clone, Default)]
pub struct LevelCatalog {
    order: Vec<LevelId>,
    levels: HashMap<LevelId, HashMap<BrickId, Brick>>,
}

impl LevelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed layout. Re-inserting a level replaces its bricks but keeps
    /// its original position in the order.
    pub fn insert_layout(&mut self, layout: &LevelLayout) -> Result<LevelId, LevelError> {
        let bricks = layout.bricks()?;
        let id = layout.level_id();
        self.insert_bricks(id.clone(), bricks);
        Ok(id)
    }

    /// Parse and add a JSON layout
    pub fn insert_json(&mut self, json: &str) -> Result<LevelId, LevelError> {
        let layout = LevelLayout::from_json(json)?;
        self.insert_layout(&layout)
    }

    /// Parse and add a JSON layout, registering `fallback` with no bricks if
    /// the layout is malformed.
    pub fn insert_json_or_empty(&mut self, fallback: LevelId, json: &str) -> LevelId {
        match self.insert_json(json) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("Level {fallback} failed to load ({err}), using an empty brick set");
                self.insert_bricks(fallback.clone(), HashMap::new());
                fallback
            }
        }
    }

    pub fn insert_bricks(&mut self, id: LevelId, bricks: HashMap<BrickId, Brick>) {
        if !self.levels.contains_key(&id) {
            self.order.push(id.clone());
        }
        log::debug!("Level {} registered with {} bricks", id, bricks.len());
        self.levels.insert(id, bricks);
    }

    /// Levels in the order they were loaded
    pub fn level_order(&self) -> &[LevelId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl LevelBricksProvider for LevelCatalog {
    fn bricks(&self, level: &LevelId) -> HashMap<BrickId, Brick> {
        self.levels.get(level).cloned().unwrap_or_default()
    }
}
