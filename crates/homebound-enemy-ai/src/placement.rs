//! Randomized choices made at enemy spawn time.
//!
//! All sampling goes through the caller's seeded RNG so spawns stay
//! deterministic for a given seed.

use rand::Rng;

use homebound_core::constants::{FENCE_MAX, FENCE_MIN};

/// Whole-number coordinate uniform over [0, extent), excluding the window
/// within `margin` of `avoid` so a fresh enemy cannot land on the player.
pub fn random_coord_excluding<R: Rng>(rng: &mut R, extent: f64, avoid: f64, margin: f64) -> f64 {
    let max = (extent as i64).max(1);
    loop {
        let c = rng.gen_range(0..max) as f64;
        if c < avoid - margin || c >= avoid + margin {
            return c;
        }
    }
}

/// Heading sampled as a whole number of degrees in [0, 360).
///
/// The value is consumed directly as radians by the walk and straight
/// behaviors, wrapping every ~6.28 units; the effective headings cluster
/// into ~57 directions. Intentional: see DESIGN.md.
pub fn random_direction_degrees<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0..360) as f64
}

/// Fence half-width for a fencing enemy, uniform whole number over
/// [FENCE_MIN, FENCE_MAX).
pub fn random_fence_half_width<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(FENCE_MIN as i64..FENCE_MAX as i64) as f64
}

/// Horizontal endpoint for a laser beam, uniform whole number over
/// [-width, 2*width) so beams can rake across the viewport at an angle.
pub fn random_laser_x<R: Rng>(rng: &mut R, width: f64) -> f64 {
    let w = width as i64;
    rng.gen_range(-w..2 * w) as f64
}
