// Shared fakes for host-side tests: a surface that records draw calls and a
// frame requester that counts requests and cancellations.

#![allow(dead_code)]

use canvas_fx::core::{FxConfig, RenderMode, ResolvedConfig, ViewportMetrics};
use canvas_fx::frame::{FrameContext, FrameHandle, FrameRequester};
use canvas_fx::{FxError, Surface};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: String,
        alpha: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: String,
        alpha: f64,
    },
    Polygon {
        points: Vec<DVec2>,
        color: String,
        alpha: f64,
    },
}

#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count()
    }
    pub fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
    }
    pub fn polygons(&self) -> Vec<&DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Polygon { .. })).collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str, alpha: f64) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: color.to_string(),
            alpha,
        });
    }
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: &str, alpha: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color: color.to_string(),
            alpha,
        });
    }
    fn fill_polygon(&mut self, points: &[DVec2], color: &str, alpha: f64) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            color: color.to_string(),
            alpha,
        });
    }
}

#[derive(Default, Debug)]
pub struct RequestLog {
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
    pub refuse: bool,
}

impl RequestLog {
    /// Requests neither fired-and-replaced nor cancelled: the last request,
    /// if it was not cancelled.
    pub fn outstanding(&self) -> Option<FrameHandle> {
        let last = *self.requested.last()?;
        (!self.cancelled.contains(&last)).then_some(last)
    }
}

/// Shares its log so tests can inspect it while the context owns the requester.
#[derive(Clone, Default)]
pub struct CountingRequester {
    pub log: Rc<RefCell<RequestLog>>,
}

impl FrameRequester for CountingRequester {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let mut log = self.log.borrow_mut();
        if log.refuse {
            return None;
        }
        let handle = FrameHandle(log.requested.len() as i32 + 1);
        log.requested.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.log.borrow_mut().cancelled.push(handle);
    }
}

pub type TestContext = FrameContext<CountingRequester, RecordingSurface>;

pub fn config(mode: RenderMode, count: i64, interactive: bool) -> ResolvedConfig {
    FxConfig {
        render_mode: mode.into(),
        particle_count: count.into(),
        palette: canvas_fx::core::PaletteSpec::List(vec![
            "#ff0000".into(),
            "#00ff00".into(),
            "#0000ff".into(),
        ]),
        interactive,
        mouse_responsive: false,
    }
    .resolve()
    .0
}

pub fn viewport(w: f64, h: f64) -> ViewportMetrics {
    ViewportMetrics::from_css_box(w, h, 1.0)
}

pub fn context(
    config: ResolvedConfig,
    viewport: ViewportMetrics,
) -> (TestContext, Rc<RefCell<RequestLog>>) {
    let requester = CountingRequester::default();
    let log = requester.log.clone();
    let ctx = FrameContext::new(
        config,
        viewport,
        Ok(RecordingSurface::default()),
        requester,
        StdRng::seed_from_u64(7),
    );
    (ctx, log)
}

pub fn context_without_surface(
    config: ResolvedConfig,
    viewport: ViewportMetrics,
) -> (TestContext, Rc<RefCell<RequestLog>>) {
    let requester = CountingRequester::default();
    let log = requester.log.clone();
    let ctx = FrameContext::new(
        config,
        viewport,
        Err(FxError::ContextUnavailable("test".into())),
        requester,
        StdRng::seed_from_u64(7),
    );
    (ctx, log)
}
