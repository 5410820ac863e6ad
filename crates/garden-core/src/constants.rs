//! Simulation constants and balance tuning.
//!
//! All values are compile-time constants; the engine has no runtime
//! configuration surface. Distances are in pixels, times in milliseconds.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick.
pub const TICK_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Grid ---

/// Number of lanes (rows).
pub const GRID_ROWS: usize = 5;

/// Number of columns.
pub const GRID_COLS: usize = 9;

/// Cell edge length in pixels.
pub const CELL_SIZE: f64 = 80.0;

/// Right edge of the grid in pixels — where zombies spawn.
pub const GRID_WIDTH: f64 = GRID_COLS as f64 * CELL_SIZE;

/// Bottom edge of the grid in pixels.
pub const GRID_HEIGHT: f64 = GRID_ROWS as f64 * CELL_SIZE;

/// A zombie whose x drops below this has breached the defended edge.
pub const BREACH_X: f64 = -CELL_SIZE;

// --- Economy ---

/// Suns the player starts each session with.
pub const INITIAL_SUNS: u32 = 50;

/// Suns gained per collected pickup.
pub const SUN_VALUE: u32 = 25;

/// Sun counter ceiling.
pub const MAX_SUNS: u32 = 500;

/// Rendered size of a sun pickup; spawn positions keep pickups on-board.
pub const SUN_SIZE: f64 = 60.0;

// --- Timings (ms) ---

/// Grace period before the first wave announcement.
pub const PREPARATION_TIME_MS: f64 = 60_000.0;

/// Preparation period for the Brutal challenge.
pub const BRUTAL_PREPARATION_TIME_MS: f64 = 180_000.0;

/// Interval between auto-fire scans of ranged plants.
pub const PLANT_FIRE_INTERVAL_MS: f64 = 2000.0;

/// Cucumber melee attack cooldown.
pub const CUCUMBER_ATTACK_MS: f64 = 1000.0;

/// Cucumber swing animation duration.
pub const CUCUMBER_SWING_MS: f64 = 200.0;

/// Magic zombie bolt cooldown.
pub const MAGIC_BOLT_INTERVAL_MS: f64 = 5000.0;

/// Interval between sky-spawned suns.
pub const NATURAL_SUN_INTERVAL_MS: f64 = 8000.0;

/// Interval between sunflower production pulses.
pub const SUNFLOWER_PRODUCE_INTERVAL_MS: f64 = 15_000.0;

/// Delay before a placed potato mine becomes armed.
pub const POTATO_MINE_ARM_MS: f64 = 7500.0;

/// Strawberry cooldown after a detonation.
pub const STRAWBERRY_SLEEP_MS: f64 = 20_000.0;

/// Explosion marker time-to-live.
pub const EXPLOSION_TTL_MS: f64 = 400.0;

/// Hit-splat marker time-to-live.
pub const HIT_SPLAT_TTL_MS: f64 = 150.0;

/// Delay between a wave announcement and the wave's first spawn.
pub const WAVE_TRANSITION_DELAY_MS: f64 = 4000.0;

// --- Movement (pixels per tick) ---

/// Pea projectile speed.
pub const PEA_SPEED: f64 = 4.0;

/// Eggplant runner speed.
pub const EGGPLANT_SPEED: f64 = 3.0;

/// Magic bolt speed (travels toward the defended edge).
pub const MAGIC_BOLT_SPEED: f64 = 4.0;

/// Fall speed of sky-spawned suns.
pub const SUN_FALL_SPEED: f64 = 1.0;

/// Speed multiplier applied to slowed zombies.
pub const SLOW_FACTOR: f64 = 0.75;

// --- Hitboxes & damage ---

/// Zombie hitbox width.
pub const ZOMBIE_HIT_WIDTH: f64 = 40.0;

/// Pea hitbox width.
pub const PEA_HIT_WIDTH: f64 = 10.0;

/// Contact damage dealt by an eggplant runner before self-destructing.
pub const EGGPLANT_DAMAGE: i32 = 15;

/// Blast damage dealt by a strawberry to each zombie in its 3x3 block.
pub const STRAWBERRY_DAMAGE: i32 = 15;

// --- Waves ---

/// Wave count of a default (non-challenge) session.
pub const DEFAULT_WAVE_COUNT: usize = 100;

/// Spawn-interval floor for standard waves.
pub const STANDARD_MIN_SPAWN_INTERVAL_MS: f64 = 500.0;

/// Spawn-interval floor for brutal waves.
pub const BRUTAL_MIN_SPAWN_INTERVAL_MS: f64 = 300.0;

/// Spawn interval carried by a fresh session before any wave starts.
pub const IDLE_SPAWN_INTERVAL_MS: f64 = 6000.0;

// --- Loadout ---

/// Exact number of plants a loadout must contain.
pub const LOADOUT_SIZE: usize = 4;
