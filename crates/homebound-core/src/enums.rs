//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game session phase (top-level state).
/// `Won` and `Lost` are terminal: no further ticking or scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Won,
    Lost,
}

/// Enemy behavior archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Constant diagonal drifter. Never scheduled; illustrative/test only.
    Demo,
    /// Pursues the player's current position with an asymmetric gait.
    Stalk,
    /// Patrols a square fence around the home zone.
    Fencing,
    /// Bounces independently on each axis between viewport edges.
    RandomWalk,
    /// Fixed heading, constant speed, despawns when it leaves the viewport.
    Straight,
    /// Stationary directional beam: charges invisibly, then fires.
    Laser,
}

/// Render color tag. Semantically a behavior marker, not a pixel concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    Green,
    Magenta,
    Red,
    Blue,
    Yellow,
    Black,
    Gray,
}

/// Which fence edge a fencing enemy is currently walking.
/// The patrol cycles Up -> Left -> Down -> Right -> Up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FenceEdge {
    #[default]
    Up,
    Left,
    Down,
    Right,
}

/// Horizontal bounce direction for random-walk enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDir {
    Left,
    Right,
}

/// Vertical bounce direction for random-walk enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalDir {
    Up,
    Down,
}

/// Laser lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaserPhase {
    /// Counting down to activation; drawn gray, no hit test.
    #[default]
    Charging,
    /// Beam live: color flips and the line-crossing hit test runs.
    Firing,
}
