//! Enemy system: evaluates every enemy FSM against a read-only view of
//! the tick, then applies all updates. Collect-then-apply keeps the FSM
//! inputs consistent: every enemy sees the same player position and no
//! partial updates from this tick.

use hecs::{Entity, World};

use homebound_core::components::{Enemy, EnemyProfile};
use homebound_core::enums::EnemyKind;
use homebound_core::events::GameEvent;
use homebound_core::types::{Bounds, Position, SimTime};

use homebound_enemy_ai::fsm::{evaluate, EnemyContext, EnemyUpdate};

use crate::world_setup;

/// Advance all enemies one tick. Expired enemies are pushed onto the
/// despawn buffer; the first hit (in iteration order) decides the
/// catching kind returned to the engine.
pub fn run(
    world: &mut World,
    bounds: Bounds,
    time: &SimTime,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) -> Option<EnemyKind> {
    let player = world_setup::player_position(world);
    let home = world_setup::home_center(world);

    let mut updates: Vec<(Entity, EnemyKind, EnemyUpdate)> = Vec::new();
    for (entity, (_, position, profile)) in
        world.query::<(&Enemy, &Position, &EnemyProfile)>().iter()
    {
        let ctx = EnemyContext {
            behavior: profile.behavior.clone(),
            position: *position,
            size: profile.size,
            level: profile.level,
            player,
            home,
            bounds,
            elapsed_secs: time.secs_since(profile.spawn_tick),
        };
        updates.push((entity, profile.kind, evaluate(&ctx)));
    }

    let mut caught = None;
    for (entity, kind, update) in updates {
        if let Ok(mut position) = world.get::<&mut Position>(entity) {
            *position = update.position;
        }
        if let Ok(mut profile) = world.get::<&mut EnemyProfile>(entity) {
            profile.behavior = update.behavior;
        }
        if update.just_fired {
            events.push(GameEvent::LaserFired);
        }
        if update.hit_player && caught.is_none() {
            caught = Some(kind);
        }
        if update.expired {
            despawn_buffer.push(entity);
            events.push(GameEvent::EnemyExpired { kind });
        }
    }
    caught
}
