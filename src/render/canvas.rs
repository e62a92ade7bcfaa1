use super::Surface;
use glam::DVec2;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `Surface` over a browser 2-D context whose transform already maps CSS
/// pixels to backing pixels.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str, alpha: f64) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        self.ctx.set_global_alpha(alpha);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: &str, alpha: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_line_width(width);
        self.ctx.set_global_alpha(alpha);
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&JsValue::from_str(color));
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: &str, alpha: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.set_global_alpha(alpha);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }
}
