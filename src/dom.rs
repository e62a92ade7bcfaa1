use crate::core::ViewportMetrics;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// CSS size of the element hosting the canvas, or of the canvas itself when
/// it is detached.
#[inline]
fn host_box(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let host: web::Element = canvas
        .parent_element()
        .unwrap_or_else(|| canvas.clone().into());
    let rect = host.get_bounding_client_rect();
    (rect.width(), rect.height())
}

/// Match the canvas backing store to its host box times `devicePixelRatio`
/// and scale `ctx` so draw calls stay in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: Option<&web::CanvasRenderingContext2d>,
) -> ViewportMetrics {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w, h) = host_box(canvas);
    let metrics = ViewportMetrics::from_css_box(w, h, dpr);

    canvas.set_width(metrics.backing_width.max(1));
    canvas.set_height(metrics.backing_height.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", metrics.css_width));
    _ = style.set_property("height", &format!("{}px", metrics.css_height));

    // resizing the backing store resets the transform
    if let Some(ctx) = ctx {
        let d = metrics.device_pixel_ratio;
        _ = ctx.set_transform(d, 0.0, 0.0, d, 0.0, 0.0);
    }
    metrics
}
