//! Player system: home arrival check and waypoint seeking.

use glam::DVec2;
use hecs::World;

use homebound_core::components::{Home, Player, Waypoint};
use homebound_core::events::GameEvent;
use homebound_core::types::Position;

/// Advance the player one tick. Returns true when the player stands
/// inside the home zone; the engine translates that into the win
/// transition and no movement happens on that tick.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    let home = world
        .query::<(&Home, &Position)>()
        .iter()
        .next()
        .map(|(_, (home, pos))| (*home, *pos));
    let Some((home, home_center)) = home else {
        return false;
    };

    let player = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (player, pos))| (player.speed, *pos));
    let Some((speed, position)) = player else {
        return false;
    };

    if home.contains(home_center, position) {
        return true;
    }

    let waypoint = world
        .query::<(&Waypoint, &Position)>()
        .iter()
        .next()
        .map(|(_, (wp, pos))| (wp.active, *pos));
    let Some((active, target)) = waypoint else {
        return false;
    };
    if !active {
        return false;
    }

    let step = DVec2::from_angle(position.bearing_to(&target)) * speed;
    let new_position = Position::from_dvec2(position.to_dvec2() + step);
    for (_, (_, pos)) in world.query_mut::<(&Player, &mut Position)>() {
        *pos = new_position;
    }

    // Arrival check runs after the move, so the final step can overshoot
    // by up to one speed unit.
    if new_position.range_to(&target) < speed {
        for (_, wp) in world.query_mut::<&mut Waypoint>() {
            wp.active = false;
        }
        events.push(GameEvent::WaypointReached);
    }

    false
}
