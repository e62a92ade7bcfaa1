use super::Surface;
use crate::constants::{
    WAVE_ALPHA, WAVE_AMPLITUDE, WAVE_BASELINE, WAVE_FREQUENCY, WAVE_LAYERS, WAVE_STEP_PX,
};
use crate::core::{Palette, ViewportMetrics};
use glam::DVec2;

/// Crest height of layer `layer` at column `x`, time `t` seconds.
#[inline]
pub fn wave_y(x: f64, t: f64, layer: usize, height: f64) -> f64 {
    height * WAVE_BASELINE + (x * WAVE_FREQUENCY + t + layer as f64).sin() * WAVE_AMPLITUDE
}

/// Vertices of one wave silhouette: bottom-left corner, the crest sampled
/// every `WAVE_STEP_PX` from 0 to `width`, then bottom-right. The polygon
/// closes back to the first vertex.
pub fn wave_layer_path(t: f64, layer: usize, width: f64, height: f64) -> Vec<DVec2> {
    let samples = if width > 0.0 && width.is_finite() {
        (width / WAVE_STEP_PX).floor() as usize + 1
    } else {
        1
    };
    let mut path = Vec::with_capacity(samples + 2);
    path.push(DVec2::new(0.0, height));
    for k in 0..samples {
        let x = k as f64 * WAVE_STEP_PX;
        path.push(DVec2::new(x, wave_y(x, t, layer, height)));
    }
    path.push(DVec2::new(width, height));
    path
}

#[inline]
pub fn wave_layer_color(layer: usize, palette: &Palette) -> &str {
    palette.get(layer)
}

pub fn draw_waves<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: &ViewportMetrics,
    palette: &Palette,
    time_sec: f64,
) {
    let (w, h) = (viewport.css_width, viewport.css_height);
    surface.clear(w, h);
    for layer in 0..WAVE_LAYERS {
        let path = wave_layer_path(time_sec, layer, w, h);
        surface.fill_polygon(&path, wave_layer_color(layer, palette), WAVE_ALPHA);
    }
}
