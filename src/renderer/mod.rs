//! Rendering boundary
//!
//! Renderers only ever see a `FrameView`, a read-only snapshot taken after a
//! tick. Nothing here can reach back into simulation state.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Aabb, GameState, ObstacleId, ObstacleKind, WorldBounds};

/// Drawable resources, resolved by the host to images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Tree,
    Rock,
    Snowboarder,
    SnowboarderDead,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::Tree,
        Sprite::Rock,
        Sprite::Snowboarder,
        Sprite::SnowboarderDead,
    ];

    pub fn for_obstacle(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Tree => Sprite::Tree,
            ObstacleKind::Rock => Sprite::Rock,
        }
    }

    pub fn for_actor(dead: bool) -> Self {
        if dead {
            Sprite::SnowboarderDead
        } else {
            Sprite::Snowboarder
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Sprite::Tree => "tree.png",
            Sprite::Rock => "rock.png",
            Sprite::Snowboarder => "snowboarder.png",
            Sprite::SnowboarderDead => "snowboarder_dead.png",
        }
    }
}

/// Key help shown in the corner
pub const INSTRUCTIONS: [&str; 4] = [
    "W -> GO FASTER",
    "S -> GO SLOWER",
    "A -> GO LEFT",
    "D -> GO RIGHT",
];

pub fn score_label(score: u64) -> String {
    format!("Score: {}", score)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub pos: Vec2,
    pub hitbox: Aabb,
    /// Sprite rectangle, wider than the hitbox
    pub draw_size: Vec2,
    pub dead: bool,
    pub sprite: Sprite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: ObstacleId,
    pub kind: ObstacleKind,
    pub hitbox: Aabb,
    pub sprite: Sprite,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    pub tick: u64,
    pub bounds: WorldBounds,
    pub score: u64,
    pub speed: u8,
    pub actor: ActorView,
    pub obstacles: Vec<ObstacleView>,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        let actor = &state.actor;
        Self {
            tick: state.time_ticks,
            bounds: state.bounds,
            score: state.display_score(),
            speed: state.speed.get(),
            actor: ActorView {
                pos: actor.pos,
                hitbox: actor.bounds(),
                draw_size: Vec2::new(ACTOR_DRAW_WIDTH, actor.size.y),
                dead: actor.dead,
                sprite: Sprite::for_actor(actor.dead),
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    hitbox: o.bounds(),
                    sprite: Sprite::for_obstacle(o.kind),
                })
                .collect(),
        }
    }

    pub fn score_label(&self) -> String {
        score_label(self.score)
    }
}

/// Rendering collaborator
pub trait Renderer {
    fn render(&mut self, frame: &FrameView);
}

/// Headless renderer: periodic progress lines through `log`
#[derive(Debug)]
pub struct LogRenderer {
    every_ticks: u64,
    reported_crash: bool,
}

impl LogRenderer {
    pub fn new(every_ticks: u64) -> Self {
        Self {
            every_ticks: every_ticks.max(1),
            reported_crash: false,
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameView) {
        if frame.actor.dead {
            if !self.reported_crash {
                self.reported_crash = true;
                log::info!("Game over at tick {} - {}", frame.tick, frame.score_label());
            }
            return;
        }

        if frame.tick % self.every_ticks == 0 {
            log::info!(
                "tick {:>6} | {} | speed {:>2} | obstacles {:>2} | x {:.0}",
                frame.tick,
                frame.score_label(),
                frame.speed,
                frame.obstacles.len(),
                frame.actor.pos.x
            );
        }
    }
}
