//! Level-indexed round scheduler.
//!
//! Each round spawns the enemy mix selected by divisibility rules on the
//! current level, bumps the level, and re-arms itself for one future
//! tick. The slot is taken before the round body runs, so a round can
//! never fire twice.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use homebound_core::constants::{
    LASER_DIVISOR_DEFAULT, LASER_DIVISOR_EVERY_TENTH, LASER_STAGGER_SECS, ROUND_MS_PER_LASER,
    TICK_RATE,
};
use homebound_core::enums::EnemyKind;
use homebound_core::events::GameEvent;
use homebound_core::types::Bounds;

use homebound_enemy_ai::placement;
use homebound_enemy_ai::profiles;

use crate::world_setup;

/// Convert a millisecond delay to whole ticks.
pub fn ms_to_ticks(ms: u64) -> u64 {
    ms * TICK_RATE as u64 / 1000
}

/// Round scheduling state. `next_round_tick` is the single armed slot;
/// `None` means the scheduler is idle (before start or after game over
/// nothing re-arms it).
#[derive(Debug, Clone)]
pub struct SpawnSchedule {
    /// Level the NEXT round will use.
    pub level: u32,
    /// Level of the most recently fired round (what the UI shows).
    pub display_level: u32,
    pub next_round_tick: Option<u64>,
    pub rounds_fired: u32,
}

impl SpawnSchedule {
    /// Idle schedule; no round will fire until re-armed.
    pub fn idle(level: u32) -> Self {
        Self {
            level,
            display_level: level,
            next_round_tick: None,
            rounds_fired: 0,
        }
    }

    /// Schedule with the first round armed at `first_round_tick`.
    pub fn starting_at(level: u32, first_round_tick: u64) -> Self {
        Self {
            next_round_tick: Some(first_round_tick),
            ..Self::idle(level)
        }
    }
}

/// Run one scheduler step. Fires at most one round per tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    bounds: Bounds,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    let Some(due_tick) = schedule.next_round_tick else {
        return;
    };
    if current_tick < due_tick {
        return;
    }
    // Take the slot before spawning anything.
    schedule.next_round_tick = None;

    let level = schedule.level;
    let mut spawned = 0u32;

    if level % 2 == 0 {
        world_setup::spawn_stalk(world, rng, level, bounds, current_tick);
        events.push(GameEvent::EnemySpawned {
            kind: EnemyKind::Stalk,
            level,
        });
        spawned += 1;
    }
    if level % 7 == 0 {
        world_setup::spawn_fencing(world, rng, level, current_tick);
        events.push(GameEvent::EnemySpawned {
            kind: EnemyKind::Fencing,
            level,
        });
        spawned += 1;
    }

    world_setup::spawn_random_walk(world, rng, level, bounds, current_tick);
    events.push(GameEvent::EnemySpawned {
        kind: EnemyKind::RandomWalk,
        level,
    });
    spawned += 1;

    if level % 3 == 0 {
        let direction = placement::random_direction_degrees(rng);
        world_setup::spawn_straight(world, rng, level, bounds, current_tick, direction);
        events.push(GameEvent::EnemySpawned {
            kind: EnemyKind::Straight,
            level,
        });
        spawned += 1;
    }

    let laser_count = laser_count_for(level);
    for i in 0..laser_count {
        let delay_secs = LASER_STAGGER_SECS * i as f64;
        world_setup::spawn_laser(world, rng, level, bounds, current_tick, delay_secs);
        events.push(GameEvent::EnemySpawned {
            kind: EnemyKind::Laser,
            level,
        });
        spawned += 1;
    }

    schedule.display_level = level;
    schedule.level += 1;
    schedule.rounds_fired += 1;
    events.push(GameEvent::RoundCompleted { level, spawned });

    // The next round waits for roughly one full laser cycle at this
    // level, plus a per-laser increment. Floor of one tick so the
    // schedule always advances.
    let laser_speed = profiles::speed_for(EnemyKind::Laser, level);
    let round_ms = laser_count * ROUND_MS_PER_LASER + (1000.0 * 2.0 * laser_speed) as u64;
    schedule.next_round_tick = Some(current_tick + ms_to_ticks(round_ms).max(1));
}

/// Number of lasers a round at `level` spawns. The quotient is truncated
/// before the integer division, so low levels spawn none.
pub fn laser_count_for(level: u32) -> u64 {
    let divisor = if level % 10 == 0 {
        LASER_DIVISOR_EVERY_TENTH
    } else {
        LASER_DIVISOR_DEFAULT
    };
    let l = level as f64;
    (l.ln() / 15f64.ln() * l) as u64 / divisor
}
