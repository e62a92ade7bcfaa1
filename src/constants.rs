//! Effect tuning constants.
//!
//! All rates are per tick, not per second: the simulation speed follows the
//! achieved frame rate.

// Particle seeding
pub const DEFAULT_PARTICLE_COUNT: usize = 50;
pub const MAX_PARTICLE_COUNT: usize = 2_000; // pairwise links are O(n^2) per frame
pub const SEED_SPEED_MAX: f64 = 1.0; // velocity components drawn from [-max, max]
pub const SEED_RADIUS_MIN: f64 = 1.0;
pub const SEED_RADIUS_MAX: f64 = 4.0;
pub const SEED_OPACITY_MIN: f64 = 0.1;
pub const SEED_OPACITY_MAX: f64 = 0.6;

// Pointer force
pub const POINTER_RADIUS: f64 = 100.0; // strictly-less-than cutoff in CSS px
pub const POINTER_FORCE_SCALE: f64 = 0.01;

// Applied every tick after the pointer impulse
pub const VELOCITY_DAMPING: f64 = 0.99;

// Connection lines
pub const LINK_DISTANCE: f64 = 100.0;
pub const LINK_ALPHA_MAX: f64 = 0.1;
pub const LINK_WIDTH: f64 = 1.0;

// Wave layers
pub const WAVE_LAYERS: usize = 3;
pub const WAVE_STEP_PX: f64 = 10.0;
pub const WAVE_FREQUENCY: f64 = 0.01; // radians per CSS px
pub const WAVE_AMPLITUDE: f64 = 50.0;
pub const WAVE_BASELINE: f64 = 0.5; // fraction of height
pub const WAVE_ALPHA: f64 = 0.3;

// Used when the configured palette resolves to nothing
pub const FALLBACK_COLOR: &str = "#ffffff";

// Host integration
pub const INTERACTION_EVENT: &str = "background-interaction";
