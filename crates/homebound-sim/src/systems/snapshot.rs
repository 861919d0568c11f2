//! Builds the per-tick GameStateSnapshot consumed by the display layer.
//! Views are plain copies of component data; the world is never exposed.

use hecs::World;

use homebound_core::components::{BehaviorState, Enemy, EnemyProfile, Home, Player, Waypoint};
use homebound_core::enums::{ColorTag, GamePhase, LaserPhase};
use homebound_core::events::GameEvent;
use homebound_core::state::{EnemyView, GameStateSnapshot, HomeView, PlayerView, WaypointView};
use homebound_core::types::{Position, SimTime};

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    level: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        level,
        banner: match phase {
            GamePhase::Won => Some("You Win".to_string()),
            GamePhase::Lost => Some("You Lose".to_string()),
            _ => None,
        },
        player: build_player_view(world),
        home: build_home_view(world),
        waypoint: build_waypoint_view(world),
        enemies: build_enemy_views(world),
        events,
    }
}

fn build_player_view(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (player, pos))| PlayerView {
            position: *pos,
            speed: player.speed,
        })
        .unwrap_or_default()
}

fn build_home_view(world: &World) -> HomeView {
    world
        .query::<(&Home, &Position)>()
        .iter()
        .next()
        .map(|(_, (home, pos))| HomeView {
            position: *pos,
            size: home.size,
        })
        .unwrap_or_default()
}

fn build_waypoint_view(world: &World) -> WaypointView {
    world
        .query::<(&Waypoint, &Position)>()
        .iter()
        .next()
        .map(|(_, (wp, pos))| WaypointView {
            position: *pos,
            active: wp.active,
        })
        .unwrap_or_default()
}

fn build_enemy_views(world: &World) -> Vec<EnemyView> {
    let mut views: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &EnemyProfile)>()
        .iter()
        .map(|(entity, (_, pos, profile))| {
            // A charging laser renders gray until it fires.
            let color = match profile.behavior {
                BehaviorState::Laser {
                    phase: LaserPhase::Charging,
                    ..
                } => ColorTag::Gray,
                _ => profile.color,
            };
            let beam_direction = match profile.behavior {
                BehaviorState::Laser { direction, .. } => Some(direction),
                _ => None,
            };
            EnemyView {
                id: entity.id(),
                kind: profile.kind,
                position: *pos,
                size: profile.size,
                color,
                beam_direction,
            }
        })
        .collect();

    // Stable ordering for the renderer and for snapshot comparisons.
    views.sort_by_key(|view| view.id);
    views
}
