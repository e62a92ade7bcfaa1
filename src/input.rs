use glam::DVec2;

/// Last pointer position seen, in viewport (client) coordinates.
///
/// Written from the pointer listener, read by the next tick; last write wins.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    last: Option<DVec2>,
}

impl PointerState {
    /// Record a move. Non-finite coordinates are dropped.
    #[inline]
    pub fn record(&mut self, x: f64, y: f64) -> bool {
        if x.is_finite() && y.is_finite() {
            self.last = Some(DVec2::new(x, y));
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.last = None;
    }

    #[inline]
    pub fn position(&self) -> Option<DVec2> {
        self.last
    }
}

/// Host-visible notification emitted once per pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionEvent {
    pub x: f64,
    pub y: f64,
}
