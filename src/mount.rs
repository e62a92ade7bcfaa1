use crate::core::{FxConfig, ResolvedConfig};
use crate::error::FxError;
use crate::events::{self, EventSubscription};
use crate::frame::FrameContext;
use crate::raf::{RafRequester, TickSlot, WebFrameContext};
use crate::render::canvas::CanvasSurface;
use crate::{dom, events::resize::resize_now};
use anyhow::anyhow;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Controls for one mounted background. Freeing it from JS tears it down.
#[wasm_bindgen]
pub struct BackgroundHandle {
    canvas: web::HtmlCanvasElement,
    ctx: Rc<RefCell<WebFrameContext>>,
    tick: TickSlot,
    pointer_sub: Option<EventSubscription>,
    resize_sub: Option<EventSubscription>,
}

/// Attach the effect to `canvas`. Only malformed config JSON is rejected;
/// out-of-range values are clamped and logged.
#[wasm_bindgen]
pub fn mount(
    canvas: web::HtmlCanvasElement,
    config: JsValue,
) -> Result<BackgroundHandle, JsValue> {
    mount_inner(canvas, &config).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn mount_inner(
    canvas: web::HtmlCanvasElement,
    config: &JsValue,
) -> anyhow::Result<BackgroundHandle> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resolved = resolve_logged(parse_config(config)?);

    let surface = acquire_surface(&canvas);
    let viewport = dom::sync_canvas_backing_size(&canvas, surface.as_ref().ok().map(|s| s.context()));

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let ctx = Rc::new(RefCell::new(FrameContext::new(
        resolved,
        viewport,
        surface,
        RafRequester::new(window.clone(), tick.clone()),
        StdRng::from_entropy(),
    )));

    let started = Instant::now();
    let ctx_tick = Rc::downgrade(&ctx);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let Some(ctx) = ctx_tick.upgrade() else {
            return;
        };
        if let Ok(mut c) = ctx.try_borrow_mut() {
            c.frame(started.elapsed().as_secs_f64());
        };
    }) as Box<dyn FnMut(f64)>));

    let resize_sub = events::wire_canvas_resize(&window, canvas.clone(), Rc::downgrade(&ctx));
    let mut handle = BackgroundHandle {
        canvas,
        ctx,
        tick,
        pointer_sub: None,
        resize_sub,
    };
    handle.sync_pointer_subscription();
    handle.ctx.borrow_mut().start();
    log::info!(
        "[fx] mounted mode={:?} particles={}",
        handle.ctx.borrow().config().render_mode,
        handle.ctx.borrow().particles().len()
    );
    Ok(handle)
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// Cancel the pending frame and remove every listener, synchronously.
    ///
    /// The tick closure lives until the handle is freed, so a JS reference to
    /// it that fires late hits an inert context instead of a dropped closure.
    pub fn stop(&mut self) {
        self.ctx.borrow_mut().stop();
        self.pointer_sub = None;
        self.resize_sub = None;
    }

    /// Re-measure the canvas now, e.g. after the host changed its layout.
    pub fn resize(&self) {
        if let Ok(mut c) = self.ctx.try_borrow_mut() {
            if !c.is_stopped() {
                resize_now(&self.canvas, &mut c);
            }
        }
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let parsed = parse_config(&config).map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
        self.ctx.borrow_mut().set_config(resolve_logged(parsed));
        self.sync_pointer_subscription();
        Ok(())
    }

    #[wasm_bindgen(js_name = setVisible)]
    pub fn set_visible(&self, visible: bool) {
        self.ctx.borrow_mut().set_visible(visible);
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.ctx.borrow().is_running()
    }
}

impl BackgroundHandle {
    /// Hold a document listener exactly while pointer tracking is on.
    fn sync_pointer_subscription(&mut self) {
        let wanted = {
            let c = self.ctx.borrow();
            !c.is_stopped() && c.config().tracks_pointer()
        };
        if !wanted {
            self.pointer_sub = None;
            return;
        }
        if self.pointer_sub.is_none() {
            if let Some(document) = dom::window_document() {
                self.pointer_sub = events::wire_pointer_tracking(
                    &document,
                    self.canvas.clone(),
                    Rc::downgrade(&self.ctx),
                );
            }
        }
    }
}

impl Drop for BackgroundHandle {
    fn drop(&mut self) {
        if !self.ctx.borrow().is_stopped() {
            self.stop();
        }
        self.tick.borrow_mut().take();
    }
}

fn parse_config(value: &JsValue) -> anyhow::Result<FxConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(FxConfig::default());
    }
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|e| anyhow!("config is not serializable: {:?}", e))?
        .into();
    Ok(FxConfig::from_json(&json)?)
}

fn resolve_logged(config: FxConfig) -> ResolvedConfig {
    let (resolved, issues) = config.resolve();
    for issue in issues {
        log::warn!("[fx] {issue}");
    }
    resolved
}

fn acquire_surface(canvas: &web::HtmlCanvasElement) -> Result<CanvasSurface, FxError> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => obj
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map(CanvasSurface::new)
            .map_err(|_| FxError::ContextUnavailable("not a 2d context".into())),
        Ok(None) => Err(FxError::ContextUnavailable("canvas has no 2d context".into())),
        Err(e) => Err(FxError::ContextUnavailable(format!("{:?}", e))),
    }
}
