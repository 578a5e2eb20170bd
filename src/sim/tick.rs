//! Fixed timestep simulation tick
//!
//! One call per accepted clock step: score, spawn, scroll + collide, retire.

use super::actor;
use super::collision::overlaps;
use super::entity::ObstacleId;
use super::obstacles;
use super::state::GameState;
use crate::consts::SCORE_RATE;

/// What happened during a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub spawned: Option<ObstacleId>,
    pub retired: Vec<ObstacleId>,
    /// Obstacle that killed the actor this tick
    pub crashed_into: Option<ObstacleId>,
}

/// Advance the game state by one fixed step
pub fn tick(state: &mut GameState) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    // Speed is pinned to zero once dead, so this freezes on its own
    state.score += f64::from(state.speed.get()) * SCORE_RATE;

    report.spawned = obstacles::spawn(&mut state.obstacles, &mut state.rng, state.bounds.width);

    // Each obstacle moves by the current speed, so everything after a fatal
    // hit stays put
    for obstacle in state.obstacles.iter_mut() {
        obstacle.pos.y += f32::from(state.speed.get());

        if state.actor.is_alive() && overlaps(&obstacle.bounds(), &state.actor.bounds()) {
            actor::kill(&mut state.actor, &mut state.speed);
            report.crashed_into = Some(obstacle.id);
            log::info!(
                "Crashed into obstacle #{} at tick {} (score {})",
                obstacle.id,
                state.time_ticks,
                state.score.round() as u64
            );
        }
    }

    report.retired = obstacles::retire(&mut state.obstacles, state.bounds.height);

    report
}
