//! Game state snapshot — the complete visible state handed to the render
//! and display collaborators after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced by the engine each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Level shown on the level counter (the most recent round's level).
    pub level: u32,
    /// End-of-game banner text, present only in terminal phases.
    pub banner: Option<String>,
    pub player: PlayerView,
    pub home: HomeView,
    pub waypoint: WaypointView,
    pub enemies: Vec<EnemyView>,
    /// Events raised during this tick.
    pub events: Vec<GameEvent>,
}

/// Player token for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub speed: f64,
}

/// Home zone for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeView {
    pub position: Position,
    pub size: f64,
}

/// Waypoint marker; hidden whenever `active` is false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaypointView {
    pub position: Position,
    pub active: bool,
}

/// One enemy for display. Sorted by `id` for stable render layering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Position,
    pub size: f64,
    /// Current display color (a charging laser reports gray, then flips to
    /// its own color when it fires).
    pub color: ColorTag,
    /// Beam direction in radians, present for lasers only.
    pub beam_direction: Option<f64>,
}
