//! ECS components for hecs entities.
//!
//! Game logic lives in systems and the enemy FSM; components carry state.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// The player token. Moves toward the active waypoint at a fixed speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Movement speed in world units per tick.
    pub speed: f64,
}

/// The home zone: an axis-aligned square of side `size` centered on the
/// entity's position. Immutable after creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Home {
    pub size: f64,
}

impl Home {
    /// True iff the point lies within the home square centered at `center`,
    /// inclusive on all four edges.
    pub fn contains(&self, center: Position, p: Position) -> bool {
        let half = self.size / 2.0;
        (center.x - half..=center.x + half).contains(&p.x)
            && (center.y - half..=center.y + half).contains(&p.y)
    }
}

/// The player's movement target. Created once per session and toggled by
/// pointer input; never destroyed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Waypoint {
    pub active: bool,
}

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Per-enemy behavior profile: archetype, parameters fixed at spawn, and the
/// variant-specific mutable behavior state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub kind: EnemyKind,
    /// Level the enemy was spawned at; parametrizes speed and lifetime.
    pub level: u32,
    /// Hit-box square side length.
    pub size: f64,
    pub color: ColorTag,
    /// Tick at which this enemy was spawned (drives elapsed-time expiry).
    pub spawn_tick: u64,
    pub behavior: BehaviorState,
}

/// Closed sum of per-variant behavior state machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BehaviorState {
    Demo,
    Stalk {
        speed: f64,
    },
    Fencing {
        speed: f64,
        /// Fence half-width around the home center, fixed at spawn.
        fence: f64,
        edge: FenceEdge,
    },
    RandomWalk {
        speed: f64,
        /// Heading sampled as a whole number of degrees in [0, 360) and
        /// consumed directly as radians by the step functions.
        direction: f64,
        x_dir: HorizontalDir,
        y_dir: VerticalDir,
    },
    Straight {
        speed: f64,
        direction: f64,
    },
    Laser {
        speed: f64,
        /// Activation stagger within the spawning round (seconds).
        delay_secs: f64,
        /// Fixed beam direction from the entity's position (radians).
        direction: f64,
        phase: LaserPhase,
    },
}
