use crate::frame::{FrameContext, FrameHandle, FrameRequester};
use crate::render::canvas::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The tick callback, shared between the requester and the mount handle that
/// drops it when freed.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub type WebFrameContext = FrameContext<RafRequester, CanvasSurface>;

pub struct RafRequester {
    window: web::Window,
    tick: TickSlot,
}

impl RafRequester {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameRequester for RafRequester {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.tick.borrow();
        let tick = slot.as_ref()?;
        self.window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}
