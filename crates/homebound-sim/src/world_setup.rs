//! Entity spawn factories for setting up the session world.
//!
//! Creates the home, waypoint, and player singletons and the per-kind
//! enemy bundles. Enemies are placed by the seeded RNG, excluding a
//! window around the player so a round cannot kill on its spawn tick.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use homebound_core::components::*;
use homebound_core::constants::*;
use homebound_core::enums::*;
use homebound_core::types::{Bounds, Position};

use homebound_enemy_ai::placement;
use homebound_enemy_ai::profiles;

/// Set up a fresh session world: home, waypoint, and player singletons.
/// Enemies are spawned later by the scheduler system.
pub fn setup_session(world: &mut World, bounds: Bounds) {
    world.clear();
    spawn_home(world, bounds);
    spawn_waypoint(world);
    spawn_player(world, bounds);
}

/// Spawn the home zone near the right viewport edge, on the vertical
/// midline. Immutable after creation.
pub fn spawn_home(world: &mut World, bounds: Bounds) -> hecs::Entity {
    world.spawn((
        Home { size: HOME_SIZE },
        Position::new(bounds.width - HOME_EDGE_OFFSET, bounds.height / 2.0),
    ))
}

/// Spawn the (inactive) waypoint singleton. It is toggled by pointer
/// input and never destroyed during a session.
pub fn spawn_waypoint(world: &mut World) -> hecs::Entity {
    world.spawn((Waypoint::default(), Position::default()))
}

/// Spawn the player at the left starting position.
pub fn spawn_player(world: &mut World, bounds: Bounds) -> hecs::Entity {
    world.spawn((
        Player {
            speed: PLAYER_SPEED,
        },
        Position::new(PLAYER_START_X, bounds.height / 2.0),
    ))
}

/// Current player position (used by spawners and the enemy system).
pub fn player_position(world: &World) -> Position {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
        .unwrap_or_default()
}

/// Home zone center.
pub fn home_center(world: &World) -> Position {
    world
        .query::<(&Home, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
        .unwrap_or_default()
}

/// Random whole-number position with both axes outside the exclusion
/// window around the player.
fn random_spawn_position(rng: &mut ChaCha8Rng, bounds: Bounds, player: Position) -> Position {
    Position::new(
        placement::random_coord_excluding(
            rng,
            bounds.width,
            player.x,
            SPAWN_EXCLUSION_HALF_WIDTH,
        ),
        placement::random_coord_excluding(
            rng,
            bounds.height,
            player.y,
            SPAWN_EXCLUSION_HALF_WIDTH,
        ),
    )
}

fn enemy_bundle(
    kind: EnemyKind,
    level: u32,
    spawn_tick: u64,
    behavior: BehaviorState,
) -> EnemyProfile {
    let arch = profiles::archetype(kind);
    EnemyProfile {
        kind,
        level,
        size: arch.size,
        color: arch.color,
        spawn_tick,
        behavior,
    }
}

/// Spawn a stalker pursuing the player.
pub fn spawn_stalk(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: u32,
    bounds: Bounds,
    spawn_tick: u64,
) -> hecs::Entity {
    let player = player_position(world);
    let position = random_spawn_position(rng, bounds, player);
    let behavior = BehaviorState::Stalk {
        speed: profiles::speed_for(EnemyKind::Stalk, level),
    };
    world.spawn((
        Enemy,
        position,
        enemy_bundle(EnemyKind::Stalk, level, spawn_tick, behavior),
    ))
}

/// Spawn a fencing enemy at the top-right fence corner around home,
/// heading Up.
pub fn spawn_fencing(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: u32,
    spawn_tick: u64,
) -> hecs::Entity {
    let home = home_center(world);
    let fence = placement::random_fence_half_width(rng);
    let position = Position::new(home.x + fence, home.y + fence);
    let behavior = BehaviorState::Fencing {
        speed: profiles::speed_for(EnemyKind::Fencing, level),
        fence,
        edge: FenceEdge::Up,
    };
    world.spawn((
        Enemy,
        position,
        enemy_bundle(EnemyKind::Fencing, level, spawn_tick, behavior),
    ))
}

/// Spawn a random-walk enemy with axis bounce directions chosen at spawn.
pub fn spawn_random_walk(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: u32,
    bounds: Bounds,
    spawn_tick: u64,
) -> hecs::Entity {
    let player = player_position(world);
    let position = random_spawn_position(rng, bounds, player);
    let behavior = BehaviorState::RandomWalk {
        speed: profiles::speed_for(EnemyKind::RandomWalk, level),
        direction: placement::random_direction_degrees(rng),
        x_dir: if rng.gen_bool(0.5) {
            HorizontalDir::Left
        } else {
            HorizontalDir::Right
        },
        y_dir: if rng.gen_bool(0.5) {
            VerticalDir::Up
        } else {
            VerticalDir::Down
        },
    };
    world.spawn((
        Enemy,
        position,
        enemy_bundle(EnemyKind::RandomWalk, level, spawn_tick, behavior),
    ))
}

/// Spawn a straight-line enemy with the given fixed bearing.
pub fn spawn_straight(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: u32,
    bounds: Bounds,
    spawn_tick: u64,
    direction: f64,
) -> hecs::Entity {
    let player = player_position(world);
    let position = random_spawn_position(rng, bounds, player);
    let behavior = BehaviorState::Straight {
        speed: profiles::speed_for(EnemyKind::Straight, level),
        direction,
    };
    world.spawn((
        Enemy,
        position,
        enemy_bundle(EnemyKind::Straight, level, spawn_tick, behavior),
    ))
}

/// Spawn a laser beam anchored just above the top edge, raking down
/// across the viewport toward a second random x endpoint below the
/// bottom edge.
pub fn spawn_laser(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: u32,
    bounds: Bounds,
    spawn_tick: u64,
    delay_secs: f64,
) -> hecs::Entity {
    let x0 = placement::random_laser_x(rng, bounds.width);
    let x1 = placement::random_laser_x(rng, bounds.width);
    let y0 = -1.0;
    let y1 = bounds.height + 1.0;

    let behavior = BehaviorState::Laser {
        speed: profiles::speed_for(EnemyKind::Laser, level),
        delay_secs,
        direction: (y1 - y0).atan2(x1 - x0),
        phase: LaserPhase::Charging,
    };
    world.spawn((
        Enemy,
        Position::new(x0, y0),
        enemy_bundle(EnemyKind::Laser, level, spawn_tick, behavior),
    ))
}

/// Spawn a demo drifter at a fixed position (tests and demos only; the
/// scheduler never produces this kind).
pub fn spawn_demo(world: &mut World, position: Position, spawn_tick: u64) -> hecs::Entity {
    world.spawn((
        Enemy,
        position,
        enemy_bundle(EnemyKind::Demo, 1, spawn_tick, BehaviorState::Demo),
    ))
}
