//! Archetype-specific parameters and level-indexed curves.
//!
//! Consolidates the per-kind tuning the FSM and spawn factories share.

use homebound_core::constants::*;
use homebound_core::enums::{ColorTag, EnemyKind};

/// Fixed display/collision parameters for an enemy kind.
pub struct EnemyArchetype {
    /// Hit-box square side length.
    pub size: f64,
    pub color: ColorTag,
}

/// Get the fixed parameters for a given kind.
pub fn archetype(kind: EnemyKind) -> EnemyArchetype {
    match kind {
        EnemyKind::Demo => EnemyArchetype {
            size: DEMO_SIZE,
            color: ColorTag::Green,
        },
        EnemyKind::Stalk => EnemyArchetype {
            size: STALK_SIZE,
            color: ColorTag::Magenta,
        },
        EnemyKind::Fencing => EnemyArchetype {
            size: FENCING_SIZE,
            color: ColorTag::Red,
        },
        EnemyKind::RandomWalk => EnemyArchetype {
            size: RANDOM_WALK_SIZE,
            color: ColorTag::Blue,
        },
        EnemyKind::Straight => EnemyArchetype {
            size: STRAIGHT_SIZE,
            color: ColorTag::Yellow,
        },
        EnemyKind::Laser => EnemyArchetype {
            size: LASER_SIZE,
            color: ColorTag::Black,
        },
    }
}

/// Per-tick speed for a kind at a given level.
///
/// Every curve saturates: each level adds a smaller increment than the
/// last (the laser curve decays toward a floor as levels climb).
/// Levels below 1 are a precondition violation upstream.
pub fn speed_for(kind: EnemyKind, level: u32) -> f64 {
    let l = level as f64;
    match kind {
        EnemyKind::Demo => 1.0,
        EnemyKind::Stalk => (1.0 - (-l).exp()) * l * 0.02 + 0.5,
        EnemyKind::Fencing => (l + 1.0).ln() / 20f64.ln() * l * 0.05 + 0.7,
        EnemyKind::RandomWalk => 7.0 * l.ln() / 50f64.ln() + 3.7,
        EnemyKind::Straight => 7.0 * l.ln() / 49f64.ln(),
        EnemyKind::Laser => 10.0 * (1.0 / 1.01f64.powi(level as i32)) / 11.0,
    }
}

/// Lifetime in seconds since spawn for kinds with a timed expiry.
/// `None` for kinds whose expiry is positional (Straight), phase-derived
/// (Laser) or absent (Demo).
pub fn lifetime_secs(kind: EnemyKind, level: u32) -> Option<f64> {
    match kind {
        EnemyKind::Demo | EnemyKind::Straight | EnemyKind::Laser => None,
        EnemyKind::Stalk => {
            Some(STALK_LIFETIME_UNIT_SECS * ((level as f64 + 1.0).ln().floor()))
        }
        EnemyKind::Fencing => Some(FENCING_LIFETIME_SECS),
        EnemyKind::RandomWalk => Some(RANDOM_WALK_LIFETIME_SECS),
    }
}
