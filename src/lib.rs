//! Snowboarder - A downhill obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, obstacles, tick)
//! - `session`: Fixed-step driver that owns the clock and pending commands
//! - `input`: Keyboard to command mapping
//! - `renderer`: Read-only frame snapshots and renderer implementations
//! - `platform`: Browser host glue
//! - `settings`: Player-facing configuration

pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;
pub use sim::{Command, GameState, WorldBounds};

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (steps per second)
    pub const FPS: u32 = 60;

    /// World speed bounds
    pub const MIN_SPEED: u8 = 0;
    pub const MAX_SPEED: u8 = 10;
    /// World speed at the start of a run
    pub const INITIAL_SPEED: u8 = 3;

    /// Live obstacle cap
    pub const MAX_OBSTACLES: usize = 75;
    /// Obstacles placed on the slope before the first tick
    pub const PRESEEDED_OBSTACLES: usize = 26;
    /// Default spawn height (just above the visible area)
    pub const SPAWN_Y: f32 = -100.0;
    /// How far below the viewport an obstacle travels before retiring
    pub const RETIRE_MARGIN: f32 = 200.0;

    /// Vertical shift of the actor per speed change
    pub const SPEED_STEP_Y: f32 = 25.0;
    /// Horizontal shift of the actor per turn command
    pub const TURN_STEP_X: f32 = 10.0;

    /// Score gained per tick per unit of world speed
    pub const SCORE_RATE: f64 = 0.1;

    /// Actor hitbox
    pub const ACTOR_WIDTH: f32 = 20.0;
    pub const ACTOR_HEIGHT: f32 = 100.0;
    /// Actor sprite is drawn wider than its hitbox
    pub const ACTOR_DRAW_WIDTH: f32 = 50.0;
    /// Actor starts this far above the bottom edge
    pub const ACTOR_START_OFFSET: f32 = 300.0;
}
