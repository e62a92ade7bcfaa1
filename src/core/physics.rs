use crate::constants::{POINTER_FORCE_SCALE, POINTER_RADIUS, VELOCITY_DAMPING};
use crate::core::particles::Particle;
use glam::DVec2;

/// Advance every particle by one tick.
///
/// `pointer` is `None` when pointer tracking is off or no move has been seen.
pub fn step(particles: &mut [Particle], bounds: DVec2, pointer: Option<DVec2>) {
    for p in particles.iter_mut() {
        step_particle(p, bounds, pointer);
    }
}

/// Order is fixed: move, wrap, pointer impulse, damping. A particle with a
/// non-finite position or velocity is left untouched.
#[inline]
pub fn step_particle(p: &mut Particle, bounds: DVec2, pointer: Option<DVec2>) {
    if !p.position.is_finite() || !p.velocity.is_finite() {
        return;
    }
    p.position += p.velocity;
    p.position.x = wrap_axis(p.position.x, bounds.x);
    p.position.y = wrap_axis(p.position.y, bounds.y);

    if let Some(pointer) = pointer {
        p.velocity -= pointer_impulse(p.position, pointer);
    }

    p.velocity *= VELOCITY_DAMPING;
}

/// Toroidal wrap into `[0, extent)`. Leaving one edge re-enters at the
/// opposite edge carrying the overshoot.
#[inline]
pub fn wrap_axis(v: f64, extent: f64) -> f64 {
    if !v.is_finite() || extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    if (0.0..extent).contains(&v) {
        return v;
    }
    let wrapped = v.rem_euclid(extent);
    // rem_euclid of a tiny negative value rounds up to `extent`
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Amount subtracted from a particle's velocity for the given pointer.
///
/// Zero at or beyond `POINTER_RADIUS`; grows linearly toward the pointer.
#[inline]
pub fn pointer_impulse(position: DVec2, pointer: DVec2) -> DVec2 {
    let d = pointer - position;
    let dist = d.x.hypot(d.y);
    if dist < POINTER_RADIUS {
        let force = (POINTER_RADIUS - dist) / POINTER_RADIUS;
        d * force * POINTER_FORCE_SCALE
    } else {
        DVec2::ZERO
    }
}
