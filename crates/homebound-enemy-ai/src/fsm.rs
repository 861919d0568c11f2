//! Enemy behavior state machines.
//!
//! Pure functions that advance one enemy by one tick from its behavior
//! state and a read-only view of the session (player, home, bounds).
//! No ECS dependency — operates on plain data.

use glam::DVec2;

use homebound_core::components::BehaviorState;
use homebound_core::constants::{
    FENCING_LIFETIME_SECS, LASER_BEAM_TOLERANCE_RAD, RANDOM_WALK_LIFETIME_SECS,
};
use homebound_core::enums::{EnemyKind, FenceEdge, HorizontalDir, LaserPhase, VerticalDir};
use homebound_core::types::{Bounds, Position};

use crate::profiles;

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub behavior: BehaviorState,
    pub position: Position,
    /// Hit-box square side length.
    pub size: f64,
    pub level: u32,
    /// Player position at the start of this tick.
    pub player: Position,
    /// Home zone center.
    pub home: Position,
    pub bounds: Bounds,
    /// Seconds since this enemy spawned.
    pub elapsed_secs: f64,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub position: Position,
    pub behavior: BehaviorState,
    /// The enemy's hit-box captured the player this tick.
    pub hit_player: bool,
    /// The expiry condition fired; the enemy leaves the session.
    pub expired: bool,
    /// A laser transitioned from charging to firing this tick.
    pub just_fired: bool,
}

/// Evaluate the FSM for one enemy. Returns the updated position, behavior
/// state, and the collision/expiry signals raised this tick.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    match ctx.behavior {
        BehaviorState::Demo => evaluate_demo(ctx),
        BehaviorState::Stalk { speed } => evaluate_stalk(ctx, speed),
        BehaviorState::Fencing { speed, fence, edge } => evaluate_fencing(ctx, speed, fence, edge),
        BehaviorState::RandomWalk {
            speed,
            direction,
            x_dir,
            y_dir,
        } => evaluate_random_walk(ctx, speed, direction, x_dir, y_dir),
        BehaviorState::Straight { speed, direction } => evaluate_straight(ctx, speed, direction),
        BehaviorState::Laser {
            speed,
            delay_secs,
            direction,
            phase,
        } => evaluate_laser(ctx, speed, delay_secs, direction, phase),
    }
}

/// True iff the player sits strictly inside the square hit-box of side
/// `size` centered at `pos`. Boundary contact is not a hit.
pub fn hits_player(pos: Position, size: f64, player: Position) -> bool {
    let half = size / 2.0;
    pos.x - half < player.x
        && player.x < pos.x + half
        && pos.y - half < player.y
        && player.y < pos.y + half
}

/// True iff the player crosses the beam: the bearing from the beam origin
/// to the player matches the beam direction within the angular tolerance.
pub fn hits_beam(origin: Position, direction: f64, player: Position) -> bool {
    (origin.bearing_to(&player) - direction).abs() <= LASER_BEAM_TOLERANCE_RAD
}

/// Constant diagonal drift; never expires.
fn evaluate_demo(ctx: &EnemyContext) -> EnemyUpdate {
    let position = Position::new(ctx.position.x + 1.0, ctx.position.y + 1.0);
    EnemyUpdate {
        position,
        behavior: BehaviorState::Demo,
        hit_player: hits_player(position, ctx.size, ctx.player),
        expired: false,
        just_fired: false,
    }
}

/// Pursues the player's current position; the x component of the step is
/// doubled relative to y, giving an asymmetric lunge.
fn evaluate_stalk(ctx: &EnemyContext, speed: f64) -> EnemyUpdate {
    let angle = ctx.position.bearing_to(&ctx.player);
    let dir = DVec2::from_angle(angle);
    let position = Position::new(
        ctx.position.x + dir.x * 2.0 * speed,
        ctx.position.y + dir.y * speed,
    );

    let lifetime = profiles::lifetime_secs(EnemyKind::Stalk, ctx.level).unwrap_or(f64::INFINITY);

    EnemyUpdate {
        position,
        behavior: ctx.behavior.clone(),
        hit_player: hits_player(position, ctx.size, ctx.player),
        expired: ctx.elapsed_secs >= lifetime,
        just_fired: false,
    }
}

/// Walks the current fence edge and turns the corner once the edge
/// boundary is crossed. The cycle is Up -> Left -> Down -> Right -> Up.
fn evaluate_fencing(ctx: &EnemyContext, speed: f64, fence: f64, edge: FenceEdge) -> EnemyUpdate {
    let mut x = ctx.position.x;
    let mut y = ctx.position.y;
    let mut next_edge = edge;

    match edge {
        FenceEdge::Up => {
            y -= speed;
            if y <= ctx.home.y - fence {
                next_edge = FenceEdge::Left;
            }
        }
        FenceEdge::Left => {
            x -= speed;
            if x <= ctx.home.x - fence {
                next_edge = FenceEdge::Down;
            }
        }
        FenceEdge::Down => {
            y += speed;
            if y >= ctx.home.y + fence {
                next_edge = FenceEdge::Right;
            }
        }
        FenceEdge::Right => {
            x += speed;
            if x >= ctx.home.x + fence {
                next_edge = FenceEdge::Up;
            }
        }
    }

    let position = Position::new(x, y);
    EnemyUpdate {
        position,
        behavior: BehaviorState::Fencing {
            speed,
            fence,
            edge: next_edge,
        },
        hit_player: hits_player(position, ctx.size, ctx.player),
        expired: ctx.elapsed_secs >= FENCING_LIFETIME_SECS,
        just_fired: false,
    }
}

/// Independent bounce behaviors per axis, each reversing at the viewport
/// edges. Step lengths are the absolute direction components times speed.
fn evaluate_random_walk(
    ctx: &EnemyContext,
    speed: f64,
    direction: f64,
    x_dir: HorizontalDir,
    y_dir: VerticalDir,
) -> EnemyUpdate {
    let x_step = direction.cos().abs() * speed;
    let y_step = direction.sin().abs() * speed;

    let mut x = ctx.position.x;
    let mut y = ctx.position.y;
    let mut new_x_dir = x_dir;
    let mut new_y_dir = y_dir;

    match x_dir {
        HorizontalDir::Left => {
            x -= x_step;
            if x <= 0.0 {
                new_x_dir = HorizontalDir::Right;
            }
        }
        HorizontalDir::Right => {
            x += x_step;
            if x > ctx.bounds.width {
                new_x_dir = HorizontalDir::Left;
            }
        }
    }

    match y_dir {
        VerticalDir::Up => {
            y -= y_step;
            if y <= 0.0 {
                new_y_dir = VerticalDir::Down;
            }
        }
        VerticalDir::Down => {
            y += y_step;
            if y > ctx.bounds.height {
                new_y_dir = VerticalDir::Up;
            }
        }
    }

    let position = Position::new(x, y);
    EnemyUpdate {
        position,
        behavior: BehaviorState::RandomWalk {
            speed,
            direction,
            x_dir: new_x_dir,
            y_dir: new_y_dir,
        },
        hit_player: hits_player(position, ctx.size, ctx.player),
        expired: ctx.elapsed_secs >= RANDOM_WALK_LIFETIME_SECS,
        just_fired: false,
    }
}

/// Fixed bearing, constant speed; expires on leaving the viewport.
fn evaluate_straight(ctx: &EnemyContext, speed: f64, direction: f64) -> EnemyUpdate {
    let step = DVec2::from_angle(direction) * speed;
    let position = Position::from_dvec2(ctx.position.to_dvec2() + step);

    EnemyUpdate {
        position,
        behavior: ctx.behavior.clone(),
        hit_player: hits_player(position, ctx.size, ctx.player),
        expired: !ctx.bounds.contains(position),
        just_fired: false,
    }
}

/// Two-phase beam: charges until `speed + delay` seconds have elapsed,
/// then fires and evaluates the line-crossing hit test until expiry at
/// `2*speed + delay` seconds. The beam origin never moves.
fn evaluate_laser(
    ctx: &EnemyContext,
    speed: f64,
    delay_secs: f64,
    direction: f64,
    phase: LaserPhase,
) -> EnemyUpdate {
    let mut new_phase = phase;
    let mut hit_player = false;
    let mut expired = false;
    let mut just_fired = false;

    match phase {
        LaserPhase::Charging => {
            if ctx.elapsed_secs >= speed + delay_secs {
                new_phase = LaserPhase::Firing;
                just_fired = true;
            }
        }
        LaserPhase::Firing => {
            hit_player = hits_beam(ctx.position, direction, ctx.player);
            expired = ctx.elapsed_secs >= 2.0 * speed + delay_secs;
        }
    }

    EnemyUpdate {
        position: ctx.position,
        behavior: BehaviorState::Laser {
            speed,
            delay_secs,
            direction,
            phase: new_phase,
        },
        hit_player,
        expired,
        just_fired,
    }
}
