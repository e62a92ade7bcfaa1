use crate::core::physics;
use crate::core::{seed_particles, Particle, ResolvedConfig, RenderMode, ViewportMetrics};
use crate::error::FxError;
use crate::input::{InteractionEvent, PointerState};
use crate::render::{self, Surface};
use rand::rngs::StdRng;

/// Token for one pending animation-frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Source of animation ticks (`requestAnimationFrame` in the browser).
pub trait FrameRequester {
    /// Ask for one more tick. `None` if the platform refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    /// Holds the one outstanding request for this instance.
    Running(FrameHandle),
}

/// Owns the single animation handle of an instance.
pub struct FrameScheduler<R> {
    requester: R,
    state: SchedulerState,
}

impl<R: FrameRequester> FrameScheduler<R> {
    pub fn new(requester: R) -> Self {
        Self {
            requester,
            state: SchedulerState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running(_))
    }

    /// Enter `Running`. A no-op returning `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        match self.requester.request_frame() {
            Some(handle) => {
                self.state = SchedulerState::Running(handle);
                true
            }
            None => {
                log::error!("[fx] animation frame request refused");
                false
            }
        }
    }

    /// Cancel the pending request, if any, and go `Idle`.
    pub fn stop(&mut self) {
        if let SchedulerState::Running(handle) =
            std::mem::replace(&mut self.state, SchedulerState::Idle)
        {
            self.requester.cancel_frame(handle);
        }
    }

    /// Request the tick after the current one. Only meaningful while running.
    pub fn reschedule(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = match self.requester.request_frame() {
            Some(handle) => SchedulerState::Running(handle),
            None => {
                log::error!("[fx] animation frame request refused, loop halted");
                SchedulerState::Idle
            }
        };
    }

    pub fn requester(&self) -> &R {
        &self.requester
    }

    pub fn requester_mut(&mut self) -> &mut R {
        &mut self.requester
    }
}

/// Per-instance effect state driven once per animation tick.
pub struct FrameContext<R, S> {
    config: ResolvedConfig,
    viewport: ViewportMetrics,
    particles: Vec<Particle>,
    seed_pending: bool,
    pointer: PointerState,
    surface: Result<S, FxError>,
    surface_error_logged: bool,
    scheduler: FrameScheduler<R>,
    rng: StdRng,
    visible: bool,
    stopped: bool,
    ticks: u64,
}

impl<R: FrameRequester, S: Surface> FrameContext<R, S> {
    /// `viewport` must already be measured; seeding is deferred while it is
    /// zero-sized. The loop does not run until [`start`](Self::start).
    pub fn new(
        config: ResolvedConfig,
        viewport: ViewportMetrics,
        surface: Result<S, FxError>,
        requester: R,
        rng: StdRng,
    ) -> Self {
        let mut ctx = Self {
            config,
            viewport,
            particles: Vec::new(),
            seed_pending: true,
            pointer: PointerState::default(),
            surface,
            surface_error_logged: false,
            scheduler: FrameScheduler::new(requester),
            rng,
            visible: true,
            stopped: false,
            ticks: 0,
        };
        ctx.try_seed();
        ctx
    }

    /// Begin animating if the mode calls for it. Idempotent.
    pub fn start(&mut self) -> bool {
        if self.stopped || !self.visible || !self.config.render_mode.is_animated() {
            return false;
        }
        let started = self.scheduler.start();
        if started {
            log::info!("[fx] running mode={:?}", self.config.render_mode);
        }
        started
    }

    /// One animation tick. `time_sec` is wall-clock seconds since mount.
    ///
    /// Inert once the scheduler is idle, so a callback delivered after
    /// teardown changes nothing.
    pub fn frame(&mut self, time_sec: f64) {
        if self.stopped || !self.scheduler.is_running() {
            return;
        }
        self.ticks += 1;

        if self.seed_pending {
            self.try_seed();
        }

        if self.config.render_mode == RenderMode::ParticleField && self.viewport.is_ready() {
            let pointer = if self.config.tracks_pointer() {
                self.pointer.position()
            } else {
                None
            };
            physics::step(&mut self.particles, self.viewport.bounds(), pointer);
        }

        self.render(time_sec);
        self.scheduler.reschedule();
    }

    fn render(&mut self, time_sec: f64) {
        match &mut self.surface {
            Ok(surface) => render::draw_frame(
                surface,
                self.config.render_mode,
                &self.viewport,
                &self.particles,
                &self.config.palette,
                time_sec,
            ),
            Err(e) => {
                if !self.surface_error_logged {
                    log::error!("[fx] {e}; rendering disabled");
                    self.surface_error_logged = true;
                }
            }
        }
    }

    /// Apply freshly measured canvas metrics.
    pub fn resize(&mut self, viewport: ViewportMetrics) {
        if self.stopped {
            return;
        }
        log::debug!(
            "[fx] resize css={}x{} dpr={} backing={}x{}",
            viewport.css_width,
            viewport.css_height,
            viewport.device_pixel_ratio,
            viewport.backing_width,
            viewport.backing_height
        );
        self.viewport = viewport;
        if !viewport.is_ready() {
            return;
        }
        if self.seed_pending {
            self.try_seed();
        } else {
            let bounds = viewport.bounds();
            for p in &mut self.particles {
                p.position.x = physics::wrap_axis(p.position.x, bounds.x);
                p.position.y = physics::wrap_axis(p.position.y, bounds.y);
            }
        }
    }

    /// Swap in a new configuration. Count or palette changes reseed the whole
    /// particle array; mode changes start or stop the loop.
    pub fn set_config(&mut self, next: ResolvedConfig) {
        if self.stopped {
            return;
        }
        let reseed = self.config.needs_reseed(&next);
        let mode_changed = self.config.render_mode != next.render_mode;
        if !next.tracks_pointer() {
            self.pointer.clear();
        }
        self.config = next;

        if reseed {
            self.seed_pending = true;
            self.try_seed();
        }
        if mode_changed {
            log::info!("[fx] mode -> {:?}", self.config.render_mode);
        }
        if self.config.render_mode.is_animated() {
            self.start();
        } else {
            self.scheduler.stop();
            if mode_changed {
                self.clear_surface();
            }
        }
    }

    /// Pause while hidden; resume when shown again.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.start();
        } else {
            self.scheduler.stop();
        }
    }

    /// Record a pointer move. Returns the event to surface to the host, or
    /// `None` when pointer tracking is off.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Option<InteractionEvent> {
        if self.stopped || !self.config.tracks_pointer() {
            return None;
        }
        self.pointer
            .record(x, y)
            .then_some(InteractionEvent { x, y })
    }

    /// Tear down: cancel the pending tick and drop all particle state.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.scheduler.stop();
        self.stopped = true;
        self.pointer.clear();
        self.particles = Vec::new();
        self.seed_pending = false;
        log::info!("[fx] stopped after {} ticks", self.ticks);
    }

    /// Replace the particle array wholesale.
    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
        self.seed_pending = false;
    }

    fn try_seed(&mut self) {
        match seed_particles(
            &mut self.rng,
            self.config.particle_count,
            &self.config.palette,
            self.viewport.bounds(),
        ) {
            Ok(particles) => {
                log::debug!("[fx] seeded {} particles", particles.len());
                self.particles = particles;
                self.seed_pending = false;
            }
            Err(e) => {
                log::debug!("[fx] {e}; seeding deferred");
                self.particles = Vec::new();
                self.seed_pending = true;
            }
        }
    }

    fn clear_surface(&mut self) {
        if let Ok(surface) = &mut self.surface {
            surface.clear(self.viewport.css_width, self.viewport.css_height);
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportMetrics {
        &self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn seed_pending(&self) -> bool {
        self.seed_pending
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn scheduler(&self) -> &FrameScheduler<R> {
        &self.scheduler
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref().ok()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut().ok()
    }
}
