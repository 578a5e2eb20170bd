//! Game state aggregate
//!
//! `GameState` exclusively owns everything the simulation mutates. Components
//! receive borrowed slices of it; nothing else keeps a copy.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{self, Command, WorldSpeed};
use super::entity::Actor;
use super::obstacles::{self, ObstacleSet};
use crate::consts::*;

/// Visible area size, supplied by the host display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Complete game state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub bounds: WorldBounds,
    pub speed: WorldSpeed,
    /// Accumulated score (displayed rounded)
    pub score: f64,
    pub actor: Actor,
    pub obstacles: ObstacleSet,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New run with the default slope: actor at its start spot, initial
    /// speed, and the pre-seeded obstacle field
    pub fn new(seed: u64, bounds: WorldBounds) -> Self {
        let mut state = Self::empty(seed, bounds);
        obstacles::preseed(
            &mut state.obstacles,
            &mut state.rng,
            PRESEEDED_OBSTACLES,
            bounds.width,
            bounds.height,
        );
        state
    }

    /// New run with no obstacles on the slope
    pub fn empty(seed: u64, bounds: WorldBounds) -> Self {
        Self {
            seed,
            bounds,
            speed: WorldSpeed::default(),
            score: 0.0,
            actor: Actor::at_start(bounds.width, bounds.height),
            obstacles: ObstacleSet::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.actor.dead
    }

    /// Apply a player command; dropped once the actor is dead
    pub fn apply(&mut self, command: Command) -> bool {
        actor::apply_command(&mut self.actor, &mut self.speed, command)
    }

    /// Score as shown on the HUD
    pub fn display_score(&self) -> u64 {
        self.score.round() as u64
    }
}
