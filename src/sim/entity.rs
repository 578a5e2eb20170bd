//! Entity model for the actor and obstacles
//!
//! Entities are plain data. Every entity's position is the center of its
//! bounding box, which spans `pos ± size / 2` on both axes.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Identifier handed out by the obstacle set, unique within a run
pub type ObstacleId = u32;

/// Axis-aligned bounding box stored as center + full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }
}

/// Obstacle types, each with a fixed footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Tall and narrow
    Tree,
    /// Wide and low
    Rock,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 2] = [ObstacleKind::Tree, ObstacleKind::Rock];

    /// Width and height in world pixels
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Tree => Vec2::new(25.0, 100.0),
            ObstacleKind::Rock => Vec2::new(100.0, 50.0),
        }
    }

    /// Fair coin flip between the two kinds
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random_bool(0.5) {
            ObstacleKind::Tree
        } else {
            ObstacleKind::Rock
        }
    }
}

/// A stationary hazard scrolling down the slope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub kind: ObstacleKind,
    pub pos: Vec2,
}

impl Obstacle {
    /// Create an obstacle. `y` of `None` places it just above the viewport.
    pub fn new(id: ObstacleId, kind: ObstacleKind, x: f32, y: Option<f32>) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::new(x, y.unwrap_or(SPAWN_Y)),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.kind.size()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size())
    }
}

/// The player-controlled snowboarder
///
/// Has no velocity of its own: vertical progress is implied by world speed,
/// and horizontal moves are instantaneous steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub size: Vec2,
    pub dead: bool,
}

impl Actor {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
            dead: false,
        }
    }

    /// Starting spot: horizontally centered, a fixed distance above the bottom
    pub fn at_start(width: f32, height: f32) -> Self {
        Self::new(Vec2::new(width / 2.0, height - ACTOR_START_OFFSET))
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }
}
