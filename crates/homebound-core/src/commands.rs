//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session (only valid before the game has started).
    StartGame,
    /// Pointer clicked at viewport coordinates; activates the waypoint.
    PointerClick { x: f64, y: f64 },
}
