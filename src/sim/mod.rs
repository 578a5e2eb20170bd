//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod actor;
pub mod clock;
pub mod collision;
pub mod entity;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use actor::{Command, WorldSpeed, apply_command, go_left, go_right, kill, slow_down, speed_up};
pub use clock::FixedStepClock;
pub use collision::overlaps;
pub use entity::{Aabb, Actor, Obstacle, ObstacleId, ObstacleKind};
pub use obstacles::{ObstacleSet, advance, advance_and_retire, preseed, retire, spawn};
pub use state::{GameState, WorldBounds};
pub use tick::{TickReport, tick};
