use super::EventSubscription;
use crate::constants::INTERACTION_EVENT;
use crate::input::InteractionEvent;
use crate::raf::WebFrameContext;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Track `pointermove` on the whole document. Positions stay in viewport
/// coordinates; each accepted move is re-dispatched on the canvas.
pub fn wire_pointer_tracking(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
    ctx: Weak<RefCell<WebFrameContext>>,
) -> Option<EventSubscription> {
    EventSubscription::attach(document, "pointermove", move |ev: web::Event| {
        let Some(pointer) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let (x, y) = (pointer.client_x() as f64, pointer.client_y() as f64);
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        // a tick holding the borrow means this move is simply dropped
        let emitted = match ctx.try_borrow_mut() {
            Ok(mut c) => c.pointer_moved(x, y),
            Err(_) => None,
        };
        if let Some(interaction) = emitted {
            dispatch_interaction(&canvas, interaction, &ev);
        }
    })
}

fn dispatch_interaction(
    canvas: &web::HtmlCanvasElement,
    interaction: InteractionEvent,
    source: &web::Event,
) {
    let detail = js_sys::Object::new();
    _ = js_sys::Reflect::set(&detail, &"x".into(), &JsValue::from_f64(interaction.x));
    _ = js_sys::Reflect::set(&detail, &"y".into(), &JsValue::from_f64(interaction.y));
    _ = js_sys::Reflect::set(&detail, &"sourceEvent".into(), source);

    let init = web::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(INTERACTION_EVENT, &init) {
        Ok(event) => {
            _ = canvas.dispatch_event(&event);
        }
        Err(e) => log::warn!("[fx] could not build interaction event: {:?}", e),
    }
}
