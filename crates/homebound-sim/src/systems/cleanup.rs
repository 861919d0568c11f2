//! Despawn buffered entities at the end of the tick, after every system
//! that might still read them has run.

use hecs::{Entity, World};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        // Already-despawned entities are fine to skip.
        let _ = world.despawn(entity);
    }
}
