//! Enemy AI for HOMEBOUND.
//!
//! Implements the per-variant behavior state machines, archetype-driven
//! speed/lifetime profiles, and the randomized spawn parameter choices.

pub mod fsm;
pub mod placement;
pub mod profiles;

pub use homebound_core as core;

#[cfg(test)]
mod tests;
