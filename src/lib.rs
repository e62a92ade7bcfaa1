//! Canvas background effects: a drifting particle field with distance-faded
//! links and pointer forces, and a layered sine-wave silhouette.
//!
//! The simulation, renderers and frame scheduling are platform-independent
//! and run against the [`render::Surface`] and [`frame::FrameRequester`]
//! traits. On `wasm32` the crate also exports `mount(canvas, config)`, which
//! binds them to a 2-D canvas context, `requestAnimationFrame` and document
//! pointer events.

pub mod constants;
pub mod core;
pub mod error;
pub mod frame;
pub mod input;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod raf;

pub use crate::core::{FxConfig, Palette, Particle, RenderMode, ResolvedConfig, ViewportMetrics};
pub use crate::error::FxError;
pub use crate::frame::{FrameContext, FrameHandle, FrameRequester, FrameScheduler};
pub use crate::render::Surface;

#[cfg(target_arch = "wasm32")]
pub use mount::{mount, BackgroundHandle};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("canvas-fx loaded");
    Ok(())
}
