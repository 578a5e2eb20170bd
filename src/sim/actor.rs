//! Actor controller: speed changes, lateral moves and death
//!
//! The actor is either alive or dead, and death is terminal. The four
//! movement operations assume a living actor; `apply_command` is the guarded
//! entry point that drops commands once the actor has died.

use serde::{Deserialize, Serialize};

use super::entity::Actor;
use crate::consts::*;

/// Shared scroll speed, always within `[MIN_SPEED, MAX_SPEED]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldSpeed(u8);

impl WorldSpeed {
    pub fn new(speed: u8) -> Self {
        Self(speed.clamp(MIN_SPEED, MAX_SPEED))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Step up by one. Returns false at the ceiling.
    pub fn increment(&mut self) -> bool {
        if self.0 < MAX_SPEED {
            self.0 += 1;
            true
        } else {
            false
        }
    }

    /// Step down by one. Returns false at the floor.
    pub fn decrement(&mut self) -> bool {
        if self.0 > MIN_SPEED {
            self.0 -= 1;
            true
        } else {
            false
        }
    }

    pub fn stop(&mut self) {
        self.0 = MIN_SPEED;
    }
}

impl Default for WorldSpeed {
    fn default() -> Self {
        Self(INITIAL_SPEED)
    }
}

/// Discrete player commands, decoupled from physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    SpeedUp,
    SlowDown,
    GoLeft,
    GoRight,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::SpeedUp,
        Command::SlowDown,
        Command::GoLeft,
        Command::GoRight,
    ];
}

/// Go faster. The actor climbs the screen as speed rises.
pub fn speed_up(actor: &mut Actor, speed: &mut WorldSpeed) {
    debug_assert!(actor.is_alive());
    if speed.increment() {
        actor.pos.y -= SPEED_STEP_Y;
    }
}

/// Go slower. The actor drops back down the screen.
pub fn slow_down(actor: &mut Actor, speed: &mut WorldSpeed) {
    debug_assert!(actor.is_alive());
    if speed.decrement() {
        actor.pos.y += SPEED_STEP_Y;
    }
}

/// Unclamped; the actor may leave the visible range
pub fn go_left(actor: &mut Actor) {
    debug_assert!(actor.is_alive());
    actor.pos.x -= TURN_STEP_X;
}

pub fn go_right(actor: &mut Actor) {
    debug_assert!(actor.is_alive());
    actor.pos.x += TURN_STEP_X;
}

/// Crash: mark the actor dead and stop the world.
///
/// Returns true only on the alive -> dead transition; repeated calls change
/// nothing.
pub fn kill(actor: &mut Actor, speed: &mut WorldSpeed) -> bool {
    if actor.dead {
        return false;
    }
    actor.dead = true;
    speed.stop();
    true
}

/// Apply a command if the actor is still alive.
///
/// Returns false when the command was dropped.
pub fn apply_command(actor: &mut Actor, speed: &mut WorldSpeed, command: Command) -> bool {
    if actor.dead {
        log::debug!("dropping {:?}: actor is dead", command);
        return false;
    }

    match command {
        Command::SpeedUp => speed_up(actor, speed),
        Command::SlowDown => slow_down(actor, speed),
        Command::GoLeft => go_left(actor),
        Command::GoRight => go_right(actor),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn actor() -> Actor {
        Actor::new(Vec2::new(400.0, 300.0))
    }

    #[test]
    fn test_speed_up_at_ceiling() {
        let mut a = actor();
        let mut speed = WorldSpeed::new(MAX_SPEED);
        speed_up(&mut a, &mut speed);
        assert_eq!(speed.get(), MAX_SPEED);
        assert_eq!(a.pos.y, 300.0);
    }

    #[test]
    fn test_slow_down_at_floor() {
        let mut a = actor();
        let mut speed = WorldSpeed::new(MIN_SPEED);
        slow_down(&mut a, &mut speed);
        assert_eq!(speed.get(), MIN_SPEED);
        assert_eq!(a.pos.y, 300.0);
    }

    #[test]
    fn test_world_speed_clamps_on_construction() {
        assert_eq!(WorldSpeed::new(42).get(), MAX_SPEED);
        assert_eq!(WorldSpeed::default().get(), INITIAL_SPEED);
    }

    #[test]
    fn test_left_then_right_is_net_zero() {
        let mut a = actor();
        go_left(&mut a);
        assert_eq!(a.pos.x, 390.0);
        go_right(&mut a);
        assert_eq!(a.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_kill_is_idempotent() {
        let mut a = actor();
        let mut speed = WorldSpeed::new(7);

        assert!(kill(&mut a, &mut speed));
        let after_first = (a.clone(), speed);

        assert!(!kill(&mut a, &mut speed));
        assert_eq!((a.clone(), speed), after_first);
        assert!(a.dead);
        assert_eq!(speed.get(), 0);
    }

    #[test]
    fn test_commands_dropped_when_dead() {
        let mut a = actor();
        let mut speed = WorldSpeed::new(4);
        kill(&mut a, &mut speed);

        for command in Command::ALL {
            assert!(!apply_command(&mut a, &mut speed, command));
        }
        assert_eq!(a.pos, Vec2::new(400.0, 300.0));
        assert_eq!(speed.get(), 0);
    }

    #[test]
    fn test_apply_command_routes() {
        let mut a = actor();
        let mut speed = WorldSpeed::new(3);

        assert!(apply_command(&mut a, &mut speed, Command::SpeedUp));
        assert_eq!(speed.get(), 4);
        assert_eq!(a.pos.y, 275.0);

        assert!(apply_command(&mut a, &mut speed, Command::SlowDown));
        assert_eq!(speed.get(), 3);
        assert_eq!(a.pos.y, 300.0);

        assert!(apply_command(&mut a, &mut speed, Command::GoRight));
        assert_eq!(a.pos.x, 410.0);
    }

    proptest! {
        #[test]
        fn prop_speed_up(s in MIN_SPEED..=MAX_SPEED) {
            let mut a = actor();
            let mut speed = WorldSpeed::new(s);
            speed_up(&mut a, &mut speed);
            if s < MAX_SPEED {
                prop_assert_eq!(speed.get(), s + 1);
                prop_assert_eq!(a.pos.y, 300.0 - SPEED_STEP_Y);
            } else {
                prop_assert_eq!(speed.get(), s);
                prop_assert_eq!(a.pos.y, 300.0);
            }
        }

        #[test]
        fn prop_slow_down(s in MIN_SPEED..=MAX_SPEED) {
            let mut a = actor();
            let mut speed = WorldSpeed::new(s);
            slow_down(&mut a, &mut speed);
            if s > MIN_SPEED {
                prop_assert_eq!(speed.get(), s - 1);
                prop_assert_eq!(a.pos.y, 300.0 + SPEED_STEP_Y);
            } else {
                prop_assert_eq!(speed.get(), s);
                prop_assert_eq!(a.pos.y, 300.0);
            }
        }

        #[test]
        fn prop_speed_stays_bounded(commands in prop::collection::vec(0usize..4, 0..200)) {
            let mut a = actor();
            let mut speed = WorldSpeed::default();
            for i in commands {
                apply_command(&mut a, &mut speed, Command::ALL[i]);
                prop_assert!(speed.get() <= MAX_SPEED);
            }
        }
    }
}
