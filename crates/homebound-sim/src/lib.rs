//! Simulation engine for HOMEBOUND.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the render/display layer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use homebound_core as core;
