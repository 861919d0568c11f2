//! Per-tick simulation systems, run in a fixed order by the engine:
//! spawner -> player -> enemy -> cleanup, then snapshot.

pub mod cleanup;
pub mod enemy;
pub mod player;
pub mod snapshot;
pub mod spawner;
