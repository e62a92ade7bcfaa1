use super::EventSubscription;
use crate::dom;
use crate::raf::WebFrameContext;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

/// Re-measure the canvas on every window resize.
pub fn wire_canvas_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    ctx: Weak<RefCell<WebFrameContext>>,
) -> Option<EventSubscription> {
    EventSubscription::attach(window, "resize", move |_ev: web::Event| {
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        if let Ok(mut c) = ctx.try_borrow_mut() {
            resize_now(&canvas, &mut c);
        };
    })
}

/// Measure, resize the backing store, then hand the metrics to the context
/// so the next tick already sees them.
pub fn resize_now(canvas: &web::HtmlCanvasElement, ctx: &mut WebFrameContext) {
    let metrics = dom::sync_canvas_backing_size(canvas, ctx.surface().map(|s| s.context()));
    ctx.resize(metrics);
}
