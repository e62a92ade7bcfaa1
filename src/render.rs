use crate::core::{Palette, Particle, RenderMode, ViewportMetrics};
use glam::DVec2;

mod connections;
mod waves;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use connections::{draw_particle_field, link_alpha};
pub use waves::{draw_waves, wave_layer_color, wave_layer_path, wave_y};

/// 2-D drawing target in CSS-pixel coordinates.
///
/// Colors are palette tokens passed through verbatim; `alpha` multiplies the
/// token's own alpha.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str, alpha: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: &str, alpha: f64);
    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[DVec2], color: &str, alpha: f64);
}

/// Draw one frame of the selected effect.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    mode: RenderMode,
    viewport: &ViewportMetrics,
    particles: &[Particle],
    palette: &Palette,
    time_sec: f64,
) {
    match mode {
        RenderMode::ParticleField => draw_particle_field(surface, viewport, particles, palette),
        RenderMode::Wave => draw_waves(surface, viewport, palette, time_sec),
        RenderMode::None => {}
    }
}
