//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// Per-tick events carried on the snapshot for the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The waypoint was (re)activated at a clicked position.
    WaypointSet { x: f64, y: f64 },
    /// The player arrived within one step of the waypoint.
    WaypointReached,
    /// A spawn round completed at the given level.
    RoundCompleted { level: u32, spawned: u32 },
    /// A single enemy was spawned.
    EnemySpawned { kind: EnemyKind, level: u32 },
    /// An enemy's expiry condition fired and it left the session.
    EnemyExpired { kind: EnemyKind },
    /// A laser transitioned from charging to firing (render color flash).
    LaserFired,
    /// The player reached home; the session is won.
    HomeReached,
    /// An enemy caught the player; the session is lost.
    PlayerCaught { kind: EnemyKind },
}
