use crate::constants::{
    SEED_OPACITY_MAX, SEED_OPACITY_MIN, SEED_RADIUS_MAX, SEED_RADIUS_MIN, SEED_SPEED_MAX,
};
use crate::core::config::Palette;
use crate::error::FxError;
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// CSS pixels.
    pub position: DVec2,
    /// CSS pixels per tick.
    pub velocity: DVec2,
    pub radius: f64,
    pub opacity: f64,
    /// Index into the palette the particle was seeded from.
    pub color: usize,
}

/// Seed `count` particles uniformly over `bounds`.
///
/// Returns `LayoutNotReady` instead of seeding against a zero-sized canvas.
pub fn seed_particles<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    palette: &Palette,
    bounds: DVec2,
) -> Result<Vec<Particle>, FxError> {
    if !(bounds.is_finite() && bounds.x > 0.0 && bounds.y > 0.0) {
        return Err(FxError::LayoutNotReady {
            width: bounds.x,
            height: bounds.y,
        });
    }
    let particles = (0..count)
        .map(|_| Particle {
            position: DVec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y)),
            velocity: DVec2::new(
                rng.gen_range(-SEED_SPEED_MAX..=SEED_SPEED_MAX),
                rng.gen_range(-SEED_SPEED_MAX..=SEED_SPEED_MAX),
            ),
            radius: rng.gen_range(SEED_RADIUS_MIN..=SEED_RADIUS_MAX),
            opacity: rng.gen_range(SEED_OPACITY_MIN..=SEED_OPACITY_MAX),
            color: rng.gen_range(0..palette.len()),
        })
        .collect();
    Ok(particles)
}
