//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World defaults ---

/// Default viewport width in world units.
pub const DEFAULT_WIDTH: f64 = 800.0;

/// Default viewport height in world units.
pub const DEFAULT_HEIGHT: f64 = 500.0;

// --- Home ---

/// Side length of the home square.
pub const HOME_SIZE: f64 = 20.0;

/// Home sits this far in from the right viewport edge.
pub const HOME_EDGE_OFFSET: f64 = 100.0;

// --- Player ---

/// Player starting x coordinate (y is the vertical midline).
pub const PLAYER_START_X: f64 = 50.0;

/// Player speed in world units per tick.
pub const PLAYER_SPEED: f64 = 5.0;

// --- Spawn placement ---

/// Fresh enemies never spawn within this distance of the player on either
/// axis, so a round cannot kill the player on the spawn tick.
pub const SPAWN_EXCLUSION_HALF_WIDTH: f64 = 20.0;

// --- Enemy hit-box sizes (square side length) ---

pub const STALK_SIZE: f64 = 7.0;
pub const FENCING_SIZE: f64 = 10.0;
pub const RANDOM_WALK_SIZE: f64 = 14.0;
pub const STRAIGHT_SIZE: f64 = 37.0;
pub const LASER_SIZE: f64 = 14.0;
pub const DEMO_SIZE: f64 = 20.0;

// --- Fencing ---

/// Fence half-width is sampled uniformly from [FENCE_MIN, FENCE_MAX).
pub const FENCE_MIN: f64 = 20.0;
pub const FENCE_MAX: f64 = 50.0;

// --- Lifetimes (seconds since spawn) ---

/// Stalk lifetime is this many seconds times floor(ln(level + 1)).
pub const STALK_LIFETIME_UNIT_SECS: f64 = 3000.0;

pub const FENCING_LIFETIME_SECS: f64 = 30.0;

pub const RANDOM_WALK_LIFETIME_SECS: f64 = 5.0;

// --- Laser ---

/// Activation stagger between consecutive lasers of one round (seconds).
pub const LASER_STAGGER_SECS: f64 = 0.02;

/// Angular tolerance of the beam hit test (radians).
pub const LASER_BEAM_TOLERANCE_RAD: f64 = 0.01;

// --- Spawn scheduler ---

/// Delay before the first round fires after mission start (milliseconds).
pub const FIRST_ROUND_DELAY_MS: u64 = 100;

/// Round duration contribution per laser spawned (milliseconds).
pub const ROUND_MS_PER_LASER: u64 = 20;

/// Laser-count divisor on ordinary levels.
pub const LASER_DIVISOR_DEFAULT: u64 = 5;

/// Laser-count divisor on every tenth level (denser laser barrage).
pub const LASER_DIVISOR_EVERY_TENTH: u64 = 3;
