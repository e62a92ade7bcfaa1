use super::Surface;
use crate::constants::{LINK_ALPHA_MAX, LINK_DISTANCE, LINK_WIDTH};
use crate::core::{Palette, Particle, ViewportMetrics};

/// Line alpha for two particles `dist` apart: `LINK_ALPHA_MAX` at contact,
/// falling linearly to exactly zero at `LINK_DISTANCE` and beyond.
#[inline]
pub fn link_alpha(dist: f64) -> f64 {
    if dist < LINK_DISTANCE {
        (LINK_DISTANCE - dist) / LINK_DISTANCE * LINK_ALPHA_MAX
    } else {
        0.0
    }
}

/// Clear, draw every particle, then link every unordered pair closer than
/// `LINK_DISTANCE`. Pairwise, so O(n^2) per frame.
pub fn draw_particle_field<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: &ViewportMetrics,
    particles: &[Particle],
    palette: &Palette,
) {
    surface.clear(viewport.css_width, viewport.css_height);

    for p in particles {
        surface.fill_circle(p.position, p.radius, palette.get(p.color), p.opacity);
    }

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dist = a.position.distance(b.position);
            if dist < LINK_DISTANCE {
                surface.stroke_line(
                    a.position,
                    b.position,
                    LINK_WIDTH,
                    palette.get(a.color),
                    link_alpha(dist),
                );
            }
        }
    }
}
