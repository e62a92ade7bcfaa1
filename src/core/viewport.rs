use glam::DVec2;

/// Canvas sizing derived from the host element's layout box.
///
/// Drawing happens in CSS pixels; the backing store is `css * dpr` so output
/// stays crisp on high-density displays.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl ViewportMetrics {
    pub fn from_css_box(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let css_width = sanitize_extent(css_width);
        let css_height = sanitize_extent(css_height);
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            css_width,
            css_height,
            device_pixel_ratio: dpr,
            backing_width: (css_width * dpr) as u32,
            backing_height: (css_height * dpr) as u32,
        }
    }

    /// Both CSS extents are non-zero, so particles can be seeded.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.css_width > 0.0 && self.css_height > 0.0
    }

    /// Simulation bounds in CSS pixels.
    #[inline]
    pub fn bounds(&self) -> DVec2 {
        DVec2::new(self.css_width, self.css_height)
    }
}

#[inline]
fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
